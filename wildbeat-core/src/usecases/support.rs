use super::{not_found_as, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};

/// Everything the public support page shows.
#[derive(Debug, Clone)]
pub struct SupportPage {
    pub settings: SupportSettings,
    pub causes: Vec<SupportCause>,
    pub donation_types: Vec<DonationType>,
    pub payment_methods: Vec<PaymentMethod>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct StoreSupportCause {
    pub id          : Option<Id>,
    pub title       : String,
    pub description : String,
    pub icon        : Option<String>,
    pub sort_order  : Option<i32>,
    pub is_active   : Option<bool>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct StorePaymentMethod {
    pub id              : Option<Id>,
    pub name            : String,
    pub tagline         : Option<String>,
    pub description     : Option<String>,
    pub integration_key : String,
    pub button_label    : Option<String>,
    pub icon            : Option<String>,
    pub currency        : Option<String>,
    /// Serialized JSON object
    pub config          : Option<String>,
    pub sort_order      : Option<i32>,
    pub is_active       : Option<bool>,
}

pub fn support_page<R>(repo: &R) -> Result<SupportPage>
where
    R: SupportRepo + DonationTypeRepo,
{
    Ok(SupportPage {
        settings: repo.get_support_settings()?,
        causes: repo.active_support_causes()?,
        donation_types: repo.active_donation_types()?,
        payment_methods: repo.active_payment_methods()?,
    })
}

pub fn update_support_settings<R: SupportRepo>(repo: &R, settings: SupportSettings) -> Result<()> {
    let mut settings = settings.auto_correct();
    settings.validate()?;
    settings.updated_at = Some(Timestamp::now());
    repo.replace_support_settings(&settings)?;
    log::info!("Updated support page settings");
    Ok(())
}

pub fn all_support_causes<R: SupportRepo>(repo: &R) -> Result<Vec<SupportCause>> {
    Ok(repo.all_support_causes()?)
}

pub fn store_support_cause<R: SupportRepo>(repo: &R, s: StoreSupportCause) -> Result<Id> {
    let cause = NewSupportCause {
        title: s.title.trim().to_owned(),
        description: s.description.trim().to_owned(),
        icon: s.icon.map(|i| i.trim().to_owned()).filter(|i| !i.is_empty()),
        sort_order: s.sort_order.unwrap_or_default(),
        is_active: s.is_active.unwrap_or(true),
    };
    cause.validate()?;
    match s.id {
        Some(id) => {
            repo.update_support_cause(id, &cause)
                .map_err(|err| not_found_as(err, Error::SupportCauseNotFound))?;
            Ok(id)
        }
        None => Ok(repo.create_support_cause(&cause)?),
    }
}

pub fn deactivate_support_cause<R: SupportRepo>(repo: &R, id: Id) -> Result<()> {
    repo.deactivate_support_cause(id)
        .map_err(|err| not_found_as(err, Error::SupportCauseNotFound))
}

pub fn all_payment_methods<R: SupportRepo>(repo: &R) -> Result<Vec<PaymentMethod>> {
    Ok(repo.all_payment_methods()?)
}

pub fn store_payment_method<R: SupportRepo>(repo: &R, s: StorePaymentMethod) -> Result<Id> {
    let method = NewPaymentMethod {
        name: s.name,
        tagline: s.tagline,
        description: s.description,
        integration_key: s
            .integration_key
            .parse()
            .unwrap_or_else(|err| match err {}),
        button_label: s.button_label,
        icon: s.icon,
        currency: s.currency.unwrap_or_default(),
        config: s.config.unwrap_or_default(),
        sort_order: s.sort_order.unwrap_or_default(),
        is_active: s.is_active.unwrap_or(true),
    }
    .auto_correct();
    method.validate()?;
    match s.id {
        Some(id) => {
            repo.update_payment_method(id, &method)
                .map_err(|err| not_found_as(err, Error::PaymentMethodNotFound))?;
            log::info!("Updated payment method {id} ({})", method.integration_key);
            Ok(id)
        }
        None => {
            let id = repo.create_payment_method(&method)?;
            log::info!("Created payment method {id} ({})", method.integration_key);
            Ok(id)
        }
    }
}

pub fn deactivate_payment_method<R: SupportRepo>(repo: &R, id: Id) -> Result<()> {
    repo.deactivate_payment_method(id)
        .map_err(|err| not_found_as(err, Error::PaymentMethodNotFound))
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use crate::util::validate::SupportInvalidation;

    fn bank_transfer() -> StorePaymentMethod {
        StorePaymentMethod {
            name: "Bank transfer".into(),
            integration_key: "bank_transfer".into(),
            config: Some(r#"{"payment_options":"IBAN RW00 1234"}"#.into()),
            ..Default::default()
        }
    }

    #[test]
    fn store_and_list_payment_methods() {
        let db = MockDb::default();
        let id = store_payment_method(&db, bank_transfer()).unwrap();
        let method = db.get_payment_method(id).unwrap();
        assert_eq!(method.currency, "USD");
        assert!(method.is_active);
        assert_eq!(
            method.integration_key,
            IntegrationKey::Manual("bank_transfer".into())
        );
        deactivate_payment_method(&db, id).unwrap();
        assert_eq!(all_payment_methods(&db).unwrap().len(), 1);
        assert!(support_page(&db).unwrap().payment_methods.is_empty());
    }

    #[test]
    fn reject_invalid_payment_methods() {
        let db = MockDb::default();
        let mut m = bank_transfer();
        m.integration_key = " ".into();
        assert!(matches!(
            store_payment_method(&db, m),
            Err(Error::Support(SupportInvalidation::PaymentMethod))
        ));
        let mut m = bank_transfer();
        m.config = Some("[1,2]".into());
        assert!(matches!(
            store_payment_method(&db, m),
            Err(Error::Support(SupportInvalidation::PaymentMethodConfig))
        ));
        let mut m = bank_transfer();
        m.id = Some(3);
        assert!(matches!(
            store_payment_method(&db, m),
            Err(Error::PaymentMethodNotFound)
        ));
    }

    #[test]
    fn update_settings() {
        let db = MockDb::default();
        let settings = SupportSettings {
            hero_title: Some("Support Wildlife".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_support_settings(&db, settings.clone()),
            Err(Error::Support(SupportInvalidation::Hero))
        ));
        let settings = SupportSettings {
            hero_subtitle: Some("Every contribution counts".into()),
            ..settings
        };
        update_support_settings(&db, settings).unwrap();
        let page = support_page(&db).unwrap();
        assert_eq!(page.settings.hero_title.as_deref(), Some("Support Wildlife"));
        assert!(page.settings.updated_at.is_some());
    }

    #[test]
    fn support_page_shows_active_causes() {
        let db = MockDb::default();
        let id = store_support_cause(
            &db,
            StoreSupportCause {
                title: "Conservation".into(),
                description: "Protect the mountain gorillas".into(),
                ..Default::default()
            },
        )
        .unwrap();
        store_support_cause(
            &db,
            StoreSupportCause {
                title: "Education".into(),
                description: "School materials".into(),
                ..Default::default()
            },
        )
        .unwrap();
        deactivate_support_cause(&db, id).unwrap();
        assert_eq!(support_page(&db).unwrap().causes.len(), 1);
        assert_eq!(all_support_causes(&db).unwrap().len(), 2);
        assert!(matches!(
            store_support_cause(&db, StoreSupportCause::default()),
            Err(Error::Support(SupportInvalidation::Cause))
        ));
    }
}
