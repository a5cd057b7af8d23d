use std::{fmt, str::FromStr};

use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;
use time::{macros::format_description, Date};

use crate::{email::EmailAddress, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// The calendar day a booked tour takes place, e.g. `2024-03-15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate(Date);

#[derive(Debug, Error)]
#[error("Invalid date, expected YYYY-MM-DD")]
pub struct BookingDateParseError;

impl BookingDate {
    pub const fn date(self) -> Date {
        self.0
    }
}

impl From<Date> for BookingDate {
    fn from(from: Date) -> Self {
        Self(from)
    }
}

impl FromStr for BookingDate {
    type Err = BookingDateParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|_| BookingDateParseError)
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (year, month, day) = (self.0.year(), u8::from(self.0.month()), self.0.day());
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id               : Id,
    pub tour_id          : Option<Id>,
    pub name             : String,
    pub email            : EmailAddress,
    pub phone            : Option<String>,
    pub date             : BookingDate,
    pub guests           : u32,
    pub special_requests : Option<String>,
    pub status           : BookingStatus,
    pub total_price      : Option<f64>,
    pub created_at       : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub tour_id          : Option<Id>,
    pub name             : String,
    pub email            : EmailAddress,
    pub phone            : Option<String>,
    pub date             : BookingDate,
    pub guests           : u32,
    pub special_requests : Option<String>,
    pub status           : BookingStatus,
    pub total_price      : Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_booking_date() {
        let date = "2024-03-05".parse::<BookingDate>().unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
        assert!("2024-13-01".parse::<BookingDate>().is_err());
        assert!("05.03.2024".parse::<BookingDate>().is_err());
        assert!("".parse::<BookingDate>().is_err());
    }

    #[test]
    fn booking_status_names() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
        assert_eq!(BookingStatus::Cancelled.as_str(), "cancelled");
        assert_eq!(
            "confirmed".parse::<BookingStatus>().unwrap(),
            BookingStatus::Confirmed
        );
        assert!("done".parse::<BookingStatus>().is_err());
    }
}
