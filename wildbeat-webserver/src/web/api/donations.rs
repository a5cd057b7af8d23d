use super::*;

#[get("/donation-types")]
pub fn get_active_donation_types(db: &State<Connections>) -> Result<Vec<json::DonationType>> {
    let types = usecases::active_donation_types(&db.shared()?)?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}

#[get("/donation-types/all")]
pub fn get_all_donation_types(
    db: &State<Connections>,
    auth: Auth,
) -> Result<Vec<json::DonationType>> {
    auth.admin(db)?;
    let types = usecases::all_donation_types(&db.shared()?)?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}

#[post("/donation-types", data = "<donation_type>")]
pub fn post_donation_type(
    db: &State<Connections>,
    auth: Auth,
    donation_type: JsonResult<json::StoreDonationType>,
) -> Result<json::Created> {
    auth.admin(db)?;
    let donation_type = from_json::store_donation_type(donation_type?.into_inner());
    let is_update = donation_type.id.is_some();
    let id = usecases::store_donation_type(&db.exclusive()?, donation_type)?;
    let msg = if is_update {
        "Donation type updated successfully"
    } else {
        "Donation type created successfully"
    };
    Ok(created(id, msg))
}

#[delete("/donation-types/<id>")]
pub fn delete_donation_type(
    db: &State<Connections>,
    auth: Auth,
    id: Id,
) -> Result<json::Message> {
    auth.admin(db)?;
    usecases::deactivate_donation_type(&db.exclusive()?, id)?;
    Ok(message("Donation type deactivated successfully"))
}

#[post("/donations", data = "<donation>")]
pub fn post_donation(
    db: &State<Connections>,
    notify: &State<Notify>,
    donation: JsonResult<json::NewDonation>,
) -> Result<json::Created> {
    let donation = from_json::record_donation(donation?.into_inner());
    let donation = flows::record_donation(db, notify.gateway(), donation)?;
    Ok(created(donation.id, "Donation processed successfully"))
}

#[get("/donations")]
pub fn get_donations(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Donation>> {
    auth.admin(db)?;
    let donations = usecases::all_donations(&db.shared()?)?;
    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

#[get("/donations/stats")]
pub fn get_donation_stats(
    db: &State<Connections>,
    auth: Auth,
) -> Result<Vec<json::DonationTypeStats>> {
    auth.admin(db)?;
    let stats = usecases::donation_stats(&db.shared()?)?;
    Ok(Json(stats.into_iter().map(Into::into).collect()))
}

#[post("/confirm-donation", data = "<confirmation>")]
pub fn post_confirm_donation(
    db: &State<Connections>,
    notify: &State<Notify>,
    confirmation: JsonResult<json::ConfirmDonation>,
) -> Result<json::DonationConfirmed> {
    let confirmation = from_json::confirm_donation(confirmation?.into_inner());
    let donation = flows::confirm_donation(db, notify.gateway(), confirmation)?;
    Ok(Json(json::DonationConfirmed {
        success: true,
        id: donation.id,
        message: "Donation confirmed successfully".to_owned(),
    }))
}
