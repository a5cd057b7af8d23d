use super::prelude::*;
use time::Duration;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

/// Checks the credentials and opens a new session.
pub fn login_with_email<R>(
    repo: &R,
    login: &Credentials,
    session_lifetime: Duration,
) -> Result<(Session, User)>
where
    R: UserRepo + SessionRepo,
{
    let user = repo
        .try_get_user_by_email(login.email)?
        .filter(|u| u.password.verify(login.password))
        .ok_or(Error::Credentials)?;
    let new_session = NewSession {
        user_id: user.id,
        token: Nonce::new(),
        expires_at: Timestamp::now() + session_lifetime,
    };
    let id = repo.create_session(&new_session)?;
    log::debug!("Opened session {id} for user {}", user.id);
    let session = repo.get_session_by_token(&new_session.token)?;
    Ok((session, user))
}

pub fn logout<R: SessionRepo>(repo: &R, token: &Nonce) -> Result<()> {
    let count = repo.delete_session_by_token(token)?;
    if count == 0 {
        log::debug!("No session to close");
    }
    Ok(())
}

pub fn delete_expired_sessions<R: SessionRepo>(repo: &R) -> Result<usize> {
    let expired_before = Timestamp::now();
    Ok(repo.delete_expired_sessions(expired_before)?)
}
