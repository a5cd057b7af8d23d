use wildbeat_entities::{booking::Booking, donation::Donation, review::Review, tour::Tour};

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    ReviewSubmitted {
        review: &'a Review,
        /// Only set if the review has to be approved by an admin.
        approval_url: Option<&'a str>,
    },
    BookingCreated {
        booking: &'a Booking,
        tour: Option<&'a Tour>,
    },
    DonationReceived {
        donation: &'a Donation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    ReviewSubmitted,
    BookingCreated,
    DonationReceived,
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        match self {
            Self::ReviewSubmitted { .. } => NotificationType::ReviewSubmitted,
            Self::BookingCreated { .. } => NotificationType::BookingCreated,
            Self::DonationReceived { .. } => NotificationType::DonationReceived,
        }
    }
}
