use super::*;

#[post("/bookings", data = "<booking>")]
pub fn post_booking(
    db: &State<Connections>,
    notify: &State<Notify>,
    auth: Auth,
    booking: JsonResult<json::NewBooking>,
) -> Result<json::Created> {
    let user = auth.user(db)?;
    let booking = from_json::book_tour(booking?.into_inner());
    let booking = flows::create_booking(db, notify.gateway(), booking)?;
    debug!("User {} booked {}", user.id, booking.id);
    Ok(created(booking.id, "Booking created successfully"))
}

#[get("/bookings")]
pub fn get_bookings(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Booking>> {
    auth.admin(db)?;
    let bookings = usecases::all_bookings(&db.shared()?)?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

#[put("/bookings/<id>/status", data = "<update>")]
pub fn put_booking_status(
    db: &State<Connections>,
    auth: Auth,
    id: Id,
    update: JsonResult<json::BookingStatusUpdate>,
) -> Result<json::Created> {
    auth.admin(db)?;
    let update = update?.into_inner();
    flows::change_booking_status(db, id, &update.status)?;
    Ok(created(id, "Booking status updated successfully"))
}
