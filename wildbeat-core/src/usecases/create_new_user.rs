use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: String,
    pub name: Option<String>,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser, role: Role) -> Result<Id> {
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = NewUserAccount {
        email: u.email,
        name: u.name.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty()),
        password,
        role,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    let id = repo.create_user(&new_user).map_err(|err| match err {
        crate::repositories::Error::AlreadyExists => Error::UserExists,
        err => Error::Repo(err),
    })?;
    Ok(id)
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            email: EmailAddress::new_unchecked(email.to_string()),
            password: password.into(),
            name: None,
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.de", "secret1"), Role::Guest).is_ok());
        assert!(db
            .get_user_by_email(&EmailAddress::new_unchecked("foo@bar.de".to_string()))
            .is_ok());
        assert!(db
            .try_get_user_by_email(&EmailAddress::new_unchecked("baz@bar.de".to_string()))
            .unwrap()
            .is_none());
        assert!(create_new_user(&db, new_user("baz@bar.de", "secret2"), Role::Guest).is_ok());
        assert_eq!(db.users.borrow().len(), 2);
    }

    #[test]
    fn create_user_with_invalid_password() {
        let db = MockDb::default();
        assert!(matches!(
            create_new_user(&db, new_user("foo@baz.io", "hello"), Role::Guest),
            Err(Error::Password)
        ));
        assert!(create_new_user(&db, new_user("foo@baz.io", "valid pass"), Role::Guest).is_ok());
    }

    #[test]
    fn create_user_with_invalid_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("", "secret"), Role::Guest).is_err());
        assert!(create_new_user(&db, new_user("fooo@", "secret"), Role::Guest).is_err());
        assert!(create_new_user(&db, new_user("fooo@bar.io", "secret"), Role::Guest).is_ok());
    }

    #[test]
    fn create_user_with_existing_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("baz@foo.bar", "secret"), Role::Guest).is_ok());
        assert!(matches!(
            create_new_user(&db, new_user("baz@foo.bar", "another"), Role::Guest),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn encrypt_user_password() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.io", "secret"), Role::Admin).is_ok());
        let users = db.users.borrow();
        assert!(users[0].password.as_ref() != "secret");
        assert!(users[0].password.verify("secret"));
        assert_eq!(users[0].role, Role::Admin);
    }
}
