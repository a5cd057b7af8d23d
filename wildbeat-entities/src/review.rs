use crate::{email::EmailAddress, id::Id, nonce::Nonce, time::Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id             : Id,
    pub tour_id        : Option<Id>,
    pub name           : String,
    pub email          : EmailAddress,
    pub rating         : Rating,
    pub review_text    : String,
    pub approved       : bool,
    pub approval_token : Option<Nonce>,
    pub created_at     : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub tour_id        : Option<Id>,
    pub name           : String,
    pub email          : EmailAddress,
    pub rating         : Rating,
    pub review_text    : String,
    pub approved       : bool,
    pub approval_token : Option<Nonce>,
}
