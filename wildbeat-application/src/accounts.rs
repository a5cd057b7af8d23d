use super::*;
use time::Duration;

pub fn signup(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
    admin_code: Option<&str>,
    configured_admin_code: Option<&str>,
) -> Result<(Id, Role)> {
    let res = connections.exclusive()?.transaction(|conn| {
        usecases::signup(conn, new_user, admin_code, configured_admin_code)
    })?;
    Ok(res)
}

/// Opens a new session and returns its bearer token.
pub fn login(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials,
    session_lifetime: Duration,
) -> Result<(Nonce, User)> {
    let (session, user) = connections.exclusive()?.transaction(|conn| {
        usecases::login_with_email(conn, credentials, session_lifetime).map_err(|err| {
            debug!("Login of {} failed: {err}", credentials.email);
            err
        })
    })?;
    Ok((session.token, user))
}

pub fn logout(connections: &sqlite::Connections, token: &Nonce) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::logout(conn, token))?;
    Ok(())
}

pub fn authorize_user(connections: &sqlite::Connections, token: &Nonce) -> Result<User> {
    let db = connections.shared()?;
    Ok(usecases::authorize_user_by_token(&db, token)?)
}

pub fn authorize_admin(connections: &sqlite::Connections, token: &Nonce) -> Result<User> {
    let db = connections.shared()?;
    Ok(usecases::authorize_admin(&db, token)?)
}

pub fn delete_expired_sessions(connections: &sqlite::Connections) -> Result<usize> {
    let count = connections
        .exclusive()?
        .transaction(|conn| usecases::delete_expired_sessions(conn))?;
    if count > 0 {
        info!("Deleted {count} expired session(s)");
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use time::Duration;

    fn new_user(email: &str) -> usecases::NewUser {
        usecases::NewUser {
            email: email.parse().unwrap(),
            password: "secret123".into(),
            name: Some("Ilyce".into()),
        }
    }

    #[test]
    fn signup_login_and_logout() {
        let fixture = BackendFixture::new();
        let (_, role) =
            flows::signup(&fixture.db_connections, new_user("guest@example.com"), None, None)
                .unwrap();
        assert_eq!(role, Role::Guest);

        let email = "guest@example.com".parse().unwrap();
        let credentials = usecases::Credentials {
            email: &email,
            password: "secret123",
        };
        let (token, user) =
            flows::login(&fixture.db_connections, &credentials, Duration::days(1)).unwrap();
        assert_eq!(user.email.as_str(), "guest@example.com");
        assert_eq!(
            flows::authorize_user(&fixture.db_connections, &token)
                .unwrap()
                .id,
            user.id
        );
        assert!(matches!(
            flows::authorize_admin(&fixture.db_connections, &token),
            Err(AppError::Business(BError::Parameter(usecases::Error::Forbidden)))
        ));

        flows::logout(&fixture.db_connections, &token).unwrap();
        assert!(matches!(
            flows::authorize_user(&fixture.db_connections, &token),
            Err(AppError::Business(BError::Parameter(usecases::Error::TokenInvalid)))
        ));
    }

    #[test]
    fn reject_wrong_password() {
        let fixture = BackendFixture::new();
        flows::signup(&fixture.db_connections, new_user("guest@example.com"), None, None).unwrap();
        let email = "guest@example.com".parse().unwrap();
        let credentials = usecases::Credentials {
            email: &email,
            password: "wrong",
        };
        assert!(matches!(
            flows::login(&fixture.db_connections, &credentials, Duration::days(1)),
            Err(AppError::Business(BError::Parameter(usecases::Error::Credentials)))
        ));
    }

    #[test]
    fn expired_sessions_are_rejected_and_removed() {
        let fixture = BackendFixture::new();
        flows::signup(
            &fixture.db_connections,
            new_user("admin@example.com"),
            Some("code"),
            Some("code"),
        )
        .unwrap();
        let email = "admin@example.com".parse().unwrap();
        let credentials = usecases::Credentials {
            email: &email,
            password: "secret123",
        };
        let (token, user) =
            flows::login(&fixture.db_connections, &credentials, Duration::seconds(-1)).unwrap();
        assert!(user.is_admin());
        assert!(flows::authorize_admin(&fixture.db_connections, &token).is_err());
        assert_eq!(
            flows::delete_expired_sessions(&fixture.db_connections).unwrap(),
            1
        );
    }
}
