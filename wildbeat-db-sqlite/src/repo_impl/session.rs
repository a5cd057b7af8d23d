use super::*;

impl_repo! {
    SessionRepo {
        read {
            fn get_session_by_token(&self, token: &Nonce) -> Result<Session>;
        }
        write {
            fn create_session(&self, session: &NewSession) -> Result<Id>;
            fn delete_session_by_token(&self, token: &Nonce) -> Result<usize>;
            fn delete_expired_sessions(&self, expired_before: Timestamp) -> Result<usize>;
        }
    }
}

fn create_session(conn: &mut SqliteConnection, session: &NewSession) -> Result<Id> {
    let NewSession {
        user_id,
        token,
        expires_at,
    } = session;
    let model = models::NewSession {
        user_id: *user_id,
        token: token.to_string(),
        expires_at: expires_at.as_millis(),
        created_at: Timestamp::now().as_millis(),
    };
    diesel::insert_into(schema::sessions::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn get_session_by_token(conn: &mut SqliteConnection, token: &Nonce) -> Result<Session> {
    use schema::sessions::dsl;
    dsl::sessions
        .filter(dsl::token.eq(token.to_string()))
        .first::<models::SessionEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn delete_session_by_token(conn: &mut SqliteConnection, token: &Nonce) -> Result<usize> {
    use schema::sessions::dsl;
    diesel::delete(dsl::sessions.filter(dsl::token.eq(token.to_string())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    expired_before: Timestamp,
) -> Result<usize> {
    use schema::sessions::dsl;
    diesel::delete(dsl::sessions.filter(dsl::expires_at.le(expired_before.as_millis())))
        .execute(conn)
        .map_err(from_diesel_err)
}
