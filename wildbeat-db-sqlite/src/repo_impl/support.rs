use super::*;

// The single row of the support settings table
const SUPPORT_SETTINGS_ID: i64 = 1;

impl_repo! {
    SupportRepo {
        read {
            fn get_support_settings(&self) -> Result<SupportSettings>;
            fn all_support_causes(&self) -> Result<Vec<SupportCause>>;
            fn active_support_causes(&self) -> Result<Vec<SupportCause>>;
            fn get_payment_method(&self, id: Id) -> Result<PaymentMethod>;
            fn all_payment_methods(&self) -> Result<Vec<PaymentMethod>>;
            fn active_payment_methods(&self) -> Result<Vec<PaymentMethod>>;
        }
        write {
            fn replace_support_settings(&self, settings: &SupportSettings) -> Result<()>;
            fn create_support_cause(&self, cause: &NewSupportCause) -> Result<Id>;
            fn update_support_cause(&self, id: Id, cause: &NewSupportCause) -> Result<()>;
            fn deactivate_support_cause(&self, id: Id) -> Result<()>;
            fn create_payment_method(&self, method: &NewPaymentMethod) -> Result<Id>;
            fn update_payment_method(&self, id: Id, method: &NewPaymentMethod) -> Result<()>;
            fn deactivate_payment_method(&self, id: Id) -> Result<()>;
        }
    }
}

fn get_support_settings(conn: &mut SqliteConnection) -> Result<SupportSettings> {
    use schema::support_settings::dsl;
    Ok(dsl::support_settings
        .filter(dsl::id.eq(SUPPORT_SETTINGS_ID))
        .first::<models::SupportSettingsEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into)
        .unwrap_or_default())
}

fn replace_support_settings(conn: &mut SqliteConnection, settings: &SupportSettings) -> Result<()> {
    use schema::support_settings::dsl;
    let changeset = models::SupportSettings::from(settings);
    let count = diesel::update(dsl::support_settings.filter(dsl::id.eq(SUPPORT_SETTINGS_ID)))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        log::warn!("Support settings row is missing and will be recreated");
        diesel::insert_into(schema::support_settings::table)
            .values(dsl::id.eq(SUPPORT_SETTINGS_ID))
            .execute(conn)
            .map_err(from_diesel_err)?;
        let count = diesel::update(dsl::support_settings.filter(dsl::id.eq(SUPPORT_SETTINGS_ID)))
            .set(&changeset)
            .execute(conn)
            .map_err(from_diesel_err)?;
        return expect_single_row(count);
    }
    Ok(())
}

fn create_support_cause(conn: &mut SqliteConnection, cause: &NewSupportCause) -> Result<Id> {
    diesel::insert_into(schema::support_causes::table)
        .values(&models::NewSupportCause::from(cause))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn update_support_cause(
    conn: &mut SqliteConnection,
    id: Id,
    cause: &NewSupportCause,
) -> Result<()> {
    use schema::support_causes::dsl;
    let count = diesel::update(dsl::support_causes.filter(dsl::id.eq(id)))
        .set(&models::NewSupportCause::from(cause))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn deactivate_support_cause(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::support_causes::dsl;
    let count = diesel::update(dsl::support_causes.filter(dsl::id.eq(id)))
        .set(dsl::is_active.eq(false))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn all_support_causes(conn: &mut SqliteConnection) -> Result<Vec<SupportCause>> {
    use schema::support_causes::dsl;
    Ok(dsl::support_causes
        .order_by((dsl::sort_order, dsl::id))
        .load::<models::SupportCauseEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn active_support_causes(conn: &mut SqliteConnection) -> Result<Vec<SupportCause>> {
    use schema::support_causes::dsl;
    Ok(dsl::support_causes
        .filter(dsl::is_active.eq(true))
        .order_by((dsl::sort_order, dsl::id))
        .load::<models::SupportCauseEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn create_payment_method(conn: &mut SqliteConnection, method: &NewPaymentMethod) -> Result<Id> {
    diesel::insert_into(schema::payment_methods::table)
        .values(&models::NewPaymentMethod::from(method))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn update_payment_method(
    conn: &mut SqliteConnection,
    id: Id,
    method: &NewPaymentMethod,
) -> Result<()> {
    use schema::payment_methods::dsl;
    let count = diesel::update(dsl::payment_methods.filter(dsl::id.eq(id)))
        .set(&models::NewPaymentMethod::from(method))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn deactivate_payment_method(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::payment_methods::dsl;
    let count = diesel::update(dsl::payment_methods.filter(dsl::id.eq(id)))
        .set(dsl::is_active.eq(false))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_payment_method(conn: &mut SqliteConnection, id: Id) -> Result<PaymentMethod> {
    use schema::payment_methods::dsl;
    Ok(dsl::payment_methods
        .filter(dsl::id.eq(id))
        .first::<models::PaymentMethodEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_payment_methods(conn: &mut SqliteConnection) -> Result<Vec<PaymentMethod>> {
    use schema::payment_methods::dsl;
    Ok(dsl::payment_methods
        .order_by((dsl::sort_order, dsl::id))
        .load::<models::PaymentMethodEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn active_payment_methods(conn: &mut SqliteConnection) -> Result<Vec<PaymentMethod>> {
    use schema::payment_methods::dsl;
    Ok(dsl::payment_methods
        .filter(dsl::is_active.eq(true))
        .order_by((dsl::sort_order, dsl::id))
        .load::<models::PaymentMethodEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
