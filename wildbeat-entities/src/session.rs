use crate::{id::Id, nonce::Nonce, time::Timestamp};

/// A login session identified by its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Id,
    pub user_id: Id,
    pub token: Nonce,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

impl Session {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub user_id: Id,
    pub token: Nonce,
    pub expires_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expires_at_its_deadline() {
        let session = Session {
            id: 1,
            user_id: 1,
            token: Nonce::new(),
            expires_at: Timestamp::from_millis(2_000),
            created_at: Timestamp::from_millis(1_000),
        };
        assert!(!session.is_expired(Timestamp::from_millis(1_999)));
        assert!(session.is_expired(Timestamp::from_millis(2_000)));
    }
}
