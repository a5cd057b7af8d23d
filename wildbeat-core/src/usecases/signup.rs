use super::{create_new_user::*, prelude::*};

/// Creates a new account.
///
/// The account is granted admin rights if the supplied admin code
/// matches the configured one. Supplying a wrong code is rejected
/// instead of silently creating a guest account.
pub fn signup<R: UserRepo>(
    repo: &R,
    new_user: NewUser,
    admin_code: Option<&str>,
    configured_admin_code: Option<&str>,
) -> Result<(Id, Role)> {
    let admin_code = admin_code.map(str::trim).filter(|c| !c.is_empty());
    let role = match (admin_code, configured_admin_code) {
        (None, _) => Role::Guest,
        (Some(code), Some(configured)) if code == configured => Role::Admin,
        (Some(_), _) => {
            log::warn!("Rejected signup of {} with invalid admin code", new_user.email);
            return Err(Error::Forbidden);
        }
    };
    let id = create_new_user(repo, new_user, role)?;
    log::info!("Signed up new user {id} with role {role}");
    Ok((id, role))
}
