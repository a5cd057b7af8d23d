use super::*;

#[get("/support-page")]
pub fn get_support_page(db: &State<Connections>) -> Result<json::SupportPage> {
    let page = usecases::support_page(&db.shared()?)?;
    Ok(Json(to_json::support_page(page)))
}

#[put("/support-page/settings", data = "<settings>")]
pub fn put_support_settings(
    db: &State<Connections>,
    auth: Auth,
    settings: JsonResult<json::SupportSettings>,
) -> Result<json::Message> {
    auth.admin(db)?;
    let settings = settings?.into_inner().into();
    usecases::update_support_settings(&db.exclusive()?, settings)?;
    Ok(message("Support page updated successfully"))
}

#[get("/support-causes")]
pub fn get_support_causes(
    db: &State<Connections>,
    auth: Auth,
) -> Result<Vec<json::SupportCause>> {
    auth.admin(db)?;
    let causes = usecases::all_support_causes(&db.shared()?)?;
    Ok(Json(causes.into_iter().map(Into::into).collect()))
}

#[post("/support-causes", data = "<cause>")]
pub fn post_support_cause(
    db: &State<Connections>,
    auth: Auth,
    cause: JsonResult<json::StoreSupportCause>,
) -> Result<json::Created> {
    auth.admin(db)?;
    let cause = from_json::store_support_cause(cause?.into_inner());
    let id = usecases::store_support_cause(&db.exclusive()?, cause)?;
    Ok(created(id, "Support cause saved successfully"))
}

#[delete("/support-causes/<id>")]
pub fn delete_support_cause(
    db: &State<Connections>,
    auth: Auth,
    id: Id,
) -> Result<json::Message> {
    auth.admin(db)?;
    usecases::deactivate_support_cause(&db.exclusive()?, id)?;
    Ok(message("Support cause deactivated successfully"))
}

#[get("/support-payment-methods")]
pub fn get_payment_methods(
    db: &State<Connections>,
    auth: Auth,
) -> Result<Vec<json::PaymentMethod>> {
    auth.admin(db)?;
    let methods = usecases::all_payment_methods(&db.shared()?)?;
    Ok(Json(methods.into_iter().map(Into::into).collect()))
}

#[post("/support-payment-methods", data = "<method>")]
pub fn post_payment_method(
    db: &State<Connections>,
    auth: Auth,
    method: JsonResult<json::StorePaymentMethod>,
) -> Result<json::Created> {
    auth.admin(db)?;
    let method = from_json::store_payment_method(method?.into_inner());
    let id = usecases::store_payment_method(&db.exclusive()?, method)?;
    Ok(created(id, "Payment method saved successfully"))
}

#[delete("/support-payment-methods/<id>")]
pub fn delete_payment_method(
    db: &State<Connections>,
    auth: Auth,
    id: Id,
) -> Result<json::Message> {
    auth.admin(db)?;
    usecases::deactivate_payment_method(&db.exclusive()?, id)?;
    Ok(message("Payment method deactivated successfully"))
}
