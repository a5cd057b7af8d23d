use super::*;
use wildbeat_entities as e;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Guest => UserRole::Guest,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Guest => Guest,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            name,
            role,
            password: _password,
            created_at: _,
        } = from;
        Self {
            id,
            email: email.into_string(),
            name,
            role: role.into(),
        }
    }
}

impl From<e::tour::Tour> for Tour {
    fn from(from: e::tour::Tour) -> Self {
        let e::tour::Tour {
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
            highlights,
            image_url,
            rating,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::booking::Booking> for Booking {
    fn from(from: e::booking::Booking) -> Self {
        let e::booking::Booking {
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
        Self {
            id,
            tour_id,
            name,
            email: email.into_string(),
            phone,
            date: date.to_string(),
            guests,
            special_requests,
            status: status.to_string(),
            total_price,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            tour_id,
            name,
            rating,
            review_text,
            created_at,
            ..
        } = from;
        Self {
            id,
            tour_id,
            name,
            rating: rating.value(),
            review_text,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::gallery::GalleryImage> for GalleryImage {
    fn from(from: e::gallery::GalleryImage) -> Self {
        let e::gallery::GalleryImage {
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
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::donation::DonationType> for DonationType {
    fn from(from: e::donation::DonationType) -> Self {
        let e::donation::DonationType {
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
            benefits,
            is_active,
            sort_order,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::donation::DonationWithType> for Donation {
    fn from(from: e::donation::DonationWithType) -> Self {
        let e::donation::DonationWithType {
            donation,
            type_title,
            type_amount,
        } = from;
        let e::donation::Donation {
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
        } = donation;
        Self {
            id,
            donation_type_id,
            name,
            email,
            amount,
            payment_method,
            transaction_id,
            status: status.to_string(),
            message,
            created_at: created_at.as_millis(),
            donation_type_title: type_title,
            donation_type_amount: type_amount,
        }
    }
}

impl From<e::donation::DonationTypeStats> for DonationTypeStats {
    fn from(from: e::donation::DonationTypeStats) -> Self {
        let e::donation::DonationTypeStats {
            donation_type_id,
            title,
            type_amount,
            count,
            total,
        } = from;
        Self {
            id: donation_type_id,
            title,
            count,
            total,
            type_amount,
        }
    }
}

impl From<e::support::SupportSettings> for SupportSettings {
    fn from(from: e::support::SupportSettings) -> Self {
        let e::support::SupportSettings {
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
            updated_at: updated_at.map(e::time::Timestamp::as_millis),
        }
    }
}

impl From<SupportSettings> for e::support::SupportSettings {
    fn from(from: SupportSettings) -> Self {
        let SupportSettings {
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
            updated_at: _,
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
            updated_at: None,
        }
    }
}

impl From<e::support::SupportCause> for SupportCause {
    fn from(from: e::support::SupportCause) -> Self {
        let e::support::SupportCause {
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

impl From<e::support::PaymentMethod> for PaymentMethod {
    fn from(from: e::support::PaymentMethod) -> Self {
        let e::support::PaymentMethod {
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
        // Stored configs are validated on write, older rows may still be broken.
        let config = serde_json::from_str(&config)
            .unwrap_or_else(|_| serde_json::Value::Object(Default::default()));
        Self {
            id,
            name,
            tagline,
            description,
            integration_key: integration_key.to_string(),
            button_label,
            icon,
            currency,
            config,
            sort_order,
            is_active,
        }
    }
}

impl From<e::support::PaymentMethod> for PublicPaymentMethod {
    fn from(from: e::support::PaymentMethod) -> Self {
        let e::support::PaymentMethod {
            id,
            name,
            tagline,
            description,
            integration_key,
            button_label,
            icon,
            currency,
            ..
        } = from;
        Self {
            id,
            name,
            tagline,
            description,
            integration_key: integration_key.to_string(),
            button_label,
            icon,
            currency,
        }
    }
}
