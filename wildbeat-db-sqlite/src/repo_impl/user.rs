use super::*;

impl_repo! {
    UserRepo {
        read {
            fn get_user(&self, id: Id) -> Result<User>;
            fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
            fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
            fn count_users(&self) -> Result<usize>;
        }
        write {
            fn create_user(&self, user: &NewUserAccount) -> Result<Id>;
        }
    }
}

fn create_user(conn: &mut SqliteConnection, user: &NewUserAccount) -> Result<Id> {
    let new_user = models::NewUser {
        email: user.email.as_str(),
        name: user.name.as_deref(),
        password: user.password.as_ref(),
        role: RolePrimitive::from(user.role),
        created_at: Timestamp::now().as_millis(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn get_user(conn: &mut SqliteConnection, id: Id) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
