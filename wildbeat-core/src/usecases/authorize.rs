use super::prelude::*;
use crate::repositories::Error as RepoError;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}

/// Returns the user of an unexpired session.
pub fn authorize_user_by_token<R>(repo: &R, token: &Nonce) -> Result<User>
where
    R: UserRepo + SessionRepo,
{
    let session = match repo.get_session_by_token(token) {
        Ok(session) => session,
        Err(RepoError::NotFound) => return Err(Error::TokenInvalid),
        Err(err) => return Err(Error::Repo(err)),
    };
    if session.is_expired(Timestamp::now()) {
        log::debug!("Session {} has expired", session.id);
        return Err(Error::TokenInvalid);
    }
    match repo.get_user(session.user_id) {
        Ok(user) => Ok(user),
        Err(RepoError::NotFound) => Err(Error::TokenInvalid),
        Err(err) => Err(Error::Repo(err)),
    }
}

pub fn authorize_admin<R>(repo: &R, token: &Nonce) -> Result<User>
where
    R: UserRepo + SessionRepo,
{
    let user = authorize_user_by_token(repo, token)?;
    authorize_role(&user, Role::Admin)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use time::Duration;

    fn open_session(db: &MockDb, email: &str, role: Role, lifetime: Duration) -> Nonce {
        let user_id = create_new_user(
            db,
            NewUser {
                email: email.parse().unwrap(),
                password: "secret".into(),
                name: None,
            },
            role,
        )
        .unwrap();
        let token = Nonce::new();
        db.create_session(&NewSession {
            user_id,
            token,
            expires_at: Timestamp::now() + lifetime,
        })
        .unwrap();
        token
    }

    #[test]
    fn authorize_with_valid_token() {
        let db = MockDb::default();
        let token = open_session(&db, "guest@example.com", Role::Guest, Duration::hours(1));
        let user = authorize_user_by_token(&db, &token).unwrap();
        assert_eq!(user.email.as_str(), "guest@example.com");
    }

    #[test]
    fn reject_unknown_or_expired_tokens() {
        let db = MockDb::default();
        assert!(matches!(
            authorize_user_by_token(&db, &Nonce::new()),
            Err(Error::TokenInvalid)
        ));
        let token = open_session(&db, "guest@example.com", Role::Guest, -Duration::hours(1));
        assert!(matches!(
            authorize_user_by_token(&db, &token),
            Err(Error::TokenInvalid)
        ));
    }

    #[test]
    fn only_admins_pass_admin_authorization() {
        let db = MockDb::default();
        let guest = open_session(&db, "guest@example.com", Role::Guest, Duration::hours(1));
        let admin = open_session(&db, "admin@example.com", Role::Admin, Duration::hours(1));
        assert!(matches!(
            authorize_admin(&db, &guest),
            Err(Error::Forbidden)
        ));
        assert!(authorize_admin(&db, &admin).is_ok());
    }
}
