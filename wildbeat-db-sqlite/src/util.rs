use anyhow::anyhow;
use wildbeat_core::{entities as e, repositories as repo};

use super::models::*;

type Result<T> = std::result::Result<T, repo::Error>;

impl From<UserEntity> for e::User {
    fn from(from: UserEntity) -> Self {
        use num_traits::FromPrimitive;
        let UserEntity {
            id,
            email,
            name,
            password,
            role,
            created_at,
        } = from;
        Self {
            id,
            email: e::EmailAddress::new_unchecked(email),
            name,
            password: e::Password::from_hash(password),
            role: e::Role::from_i16(role).unwrap_or_else(|| {
                log::warn!(
                    "Could not cast role from i16 (value: {}). Use {:?} instead.",
                    role,
                    e::Role::default()
                );
                e::Role::default()
            }),
            created_at: e::Timestamp::from_millis(created_at),
        }
    }
}

impl TryFrom<SessionEntity> for e::Session {
    type Error = repo::Error;

    fn try_from(from: SessionEntity) -> Result<Self> {
        let SessionEntity {
            id,
            user_id,
            token,
            expires_at,
            created_at,
        } = from;
        let token = token
            .parse::<e::Nonce>()
            .map_err(|_| anyhow!("Invalid session token: {token}"))?;
        Ok(Self {
            id,
            user_id,
            token,
            expires_at: e::Timestamp::from_millis(expires_at),
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}

impl From<TourEntity> for e::Tour {
    fn from(from: TourEntity) -> Self {
        let TourEntity {
            id,
            title,
            description,
            price,
            duration,
            group_size,
            location,
            highlights,
            image_url,
            rating,
            created_at,
        } = from;
        Self {
            id,
            title,
            description,
            price,
            duration,
            group_size,
            location,
            highlights: e::split_list(&highlights),
            image_url,
            rating,
            created_at: e::Timestamp::from_millis(created_at),
        }
    }
}

impl TryFrom<BookingEntity> for e::Booking {
    type Error = repo::Error;

    fn try_from(from: BookingEntity) -> Result<Self> {
        let BookingEntity {
            id,
            tour_id,
            name,
            email,
            phone,
            date,
            guests,
            special_requests,
            status,
            total_price,
            created_at,
        } = from;
        let date = date
            .parse::<e::BookingDate>()
            .map_err(|_| anyhow!("Invalid booking date: {date}"))?;
        let status = status
            .parse::<e::BookingStatus>()
            .map_err(|_| anyhow!("Invalid booking status: {status}"))?;
        let guests = u32::try_from(guests).map_err(|_| anyhow!("Invalid guests: {guests}"))?;
        Ok(Self {
            id,
            tour_id,
            name,
            email: e::EmailAddress::new_unchecked(email),
            phone,
            date,
            guests,
            special_requests,
            status,
            total_price,
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}

impl TryFrom<ReviewEntity> for e::Review {
    type Error = repo::Error;

    fn try_from(from: ReviewEntity) -> Result<Self> {
        let ReviewEntity {
            id,
            tour_id,
            name,
            email,
            rating,
            review_text,
            approved,
            approval_token,
            created_at,
        } = from;
        let rating = u8::try_from(rating)
            .ok()
            .and_then(e::Rating::new)
            .ok_or_else(|| anyhow!("Invalid rating: {rating}"))?;
        let approval_token = approval_token
            .map(|token| {
                token
                    .parse::<e::Nonce>()
                    .map_err(|_| anyhow!("Invalid approval token: {token}"))
            })
            .transpose()?;
        Ok(Self {
            id,
            tour_id,
            name,
            email: e::EmailAddress::new_unchecked(email),
            rating,
            review_text,
            approved,
            approval_token,
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}

impl From<GalleryImageEntity> for e::GalleryImage {
    fn from(from: GalleryImageEntity) -> Self {
        let GalleryImageEntity {
            id,
            title,
            image_url,
            category,
            alt_text,
            created_at,
        } = from;
        Self {
            id,
            title,
            image_url,
            category,
            alt_text,
            created_at: e::Timestamp::from_millis(created_at),
        }
    }
}

impl From<DonationTypeEntity> for e::DonationType {
    fn from(from: DonationTypeEntity) -> Self {
        let DonationTypeEntity {
            id,
            title,
            amount,
            description,
            icon_color,
            benefits,
            is_active,
            sort_order,
            created_at,
            updated_at,
        } = from;
        Self {
            id,
            title,
            amount,
            description,
            icon_color,
            benefits: e::split_list(&benefits),
            is_active,
            sort_order,
            created_at: e::Timestamp::from_millis(created_at),
            updated_at: e::Timestamp::from_millis(updated_at),
        }
    }
}

impl TryFrom<DonationEntity> for e::Donation {
    type Error = repo::Error;

    fn try_from(from: DonationEntity) -> Result<Self> {
        let DonationEntity {
            id,
            donation_type_id,
            name,
            email,
            amount,
            payment_method,
            transaction_id,
            status,
            message,
            created_at,
        } = from;
        let status = status
            .parse::<e::DonationStatus>()
            .map_err(|_| anyhow!("Invalid donation status: {status}"))?;
        Ok(Self {
            id,
            donation_type_id,
            name,
            email,
            amount,
            payment_method,
            transaction_id,
            status,
            message,
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}

impl From<SupportSettingsEntity> for e::SupportSettings {
    fn from(from: SupportSettingsEntity) -> Self {
        let SupportSettingsEntity {
            id: _,
            hero_kicker,
            hero_title,
            hero_subtitle,
            hero_description,
            hero_cta_label,
            hero_cta_link,
            stats_label_one,
            stats_value_one,
            stats_label_two,
            stats_value_two,
            stats_label_three,
            stats_value_three,
            custom_title,
            custom_description,
            custom_button_label,
            custom_button_link,
            updated_at,
        } = from;
        Self {
            hero_kicker,
            hero_title,
            hero_subtitle,
            hero_description,
            hero_cta_label,
            hero_cta_link,
            stats_label_one,
            stats_value_one,
            stats_label_two,
            stats_value_two,
            stats_label_three,
            stats_value_three,
            custom_title,
            custom_description,
            custom_button_label,
            custom_button_link,
            updated_at: updated_at.map(e::Timestamp::from_millis),
        }
    }
}

impl<'a> From<&'a e::SupportSettings> for SupportSettings<'a> {
    fn from(from: &'a e::SupportSettings) -> Self {
        Self {
            hero_kicker: from.hero_kicker.as_deref(),
            hero_title: from.hero_title.as_deref(),
            hero_subtitle: from.hero_subtitle.as_deref(),
            hero_description: from.hero_description.as_deref(),
            hero_cta_label: from.hero_cta_label.as_deref(),
            hero_cta_link: from.hero_cta_link.as_deref(),
            stats_label_one: from.stats_label_one.as_deref(),
            stats_value_one: from.stats_value_one.as_deref(),
            stats_label_two: from.stats_label_two.as_deref(),
            stats_value_two: from.stats_value_two.as_deref(),
            stats_label_three: from.stats_label_three.as_deref(),
            stats_value_three: from.stats_value_three.as_deref(),
            custom_title: from.custom_title.as_deref(),
            custom_description: from.custom_description.as_deref(),
            custom_button_label: from.custom_button_label.as_deref(),
            custom_button_link: from.custom_button_link.as_deref(),
            updated_at: from.updated_at.map(e::Timestamp::as_millis),
        }
    }
}

impl From<SupportCauseEntity> for e::SupportCause {
    fn from(from: SupportCauseEntity) -> Self {
        let SupportCauseEntity {
            id,
            title,
            description,
            icon,
            sort_order,
            is_active,
        } = from;
        Self {
            id,
            title,
            description,
            icon,
            sort_order,
            is_active,
        }
    }
}

impl<'a> From<&'a e::NewSupportCause> for NewSupportCause<'a> {
    fn from(from: &'a e::NewSupportCause) -> Self {
        Self {
            title: &from.title,
            description: &from.description,
            icon: from.icon.as_deref(),
            sort_order: from.sort_order,
            is_active: from.is_active,
        }
    }
}

impl From<PaymentMethodEntity> for e::PaymentMethod {
    fn from(from: PaymentMethodEntity) -> Self {
        let PaymentMethodEntity {
            id,
            name,
            tagline,
            description,
            integration_key,
            button_label,
            icon,
            currency,
            config,
            sort_order,
            is_active,
        } = from;
        let integration_key = match integration_key.parse::<e::IntegrationKey>() {
            Ok(key) => key,
            Err(never) => match never {},
        };
        Self {
            id,
            name,
            tagline,
            description,
            integration_key,
            button_label,
            icon,
            currency,
            config,
            sort_order,
            is_active,
        }
    }
}

impl<'a> From<&'a e::NewPaymentMethod> for NewPaymentMethod<'a> {
    fn from(from: &'a e::NewPaymentMethod) -> Self {
        Self {
            name: &from.name,
            tagline: from.tagline.as_deref(),
            description: from.description.as_deref(),
            integration_key: from.integration_key.as_str(),
            button_label: from.button_label.as_deref(),
            icon: from.icon.as_deref(),
            currency: &from.currency,
            config: &from.config,
            sort_order: from.sort_order,
            is_active: from.is_active,
        }
    }
}
