use super::*;

impl_repo! {
    BookingRepo {
        read {
            fn get_booking(&self, id: Id) -> Result<Booking>;
            fn all_bookings_newest_first(&self) -> Result<Vec<Booking>>;
        }
        write {
            fn create_booking(&self, booking: &NewBooking) -> Result<Id>;
            fn update_booking_status(&self, id: Id, status: BookingStatus) -> Result<()>;
        }
    }
}

fn create_booking(conn: &mut SqliteConnection, booking: &NewBooking) -> Result<Id> {
    let NewBooking {
        tour_id,
        name,
        email,
        phone,
        date,
        guests,
        special_requests,
        status,
        total_price,
    } = booking;
    let guests = i32::try_from(*guests).map_err(|err| repo::Error::Other(err.into()))?;
    let model = models::NewBooking {
        tour_id: *tour_id,
        name,
        email: email.as_str(),
        phone: phone.as_deref(),
        date: date.to_string(),
        guests,
        special_requests: special_requests.as_deref(),
        status: status.as_str(),
        total_price: *total_price,
        created_at: Timestamp::now().as_millis(),
    };
    diesel::insert_into(schema::bookings::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn get_booking(conn: &mut SqliteConnection, id: Id) -> Result<Booking> {
    use schema::bookings::dsl;
    dsl::bookings
        .filter(dsl::id.eq(id))
        .first::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn update_booking_status(conn: &mut SqliteConnection, id: Id, status: BookingStatus) -> Result<()> {
    use schema::bookings::dsl;
    let count = diesel::update(dsl::bookings.filter(dsl::id.eq(id)))
        .set(dsl::status.eq(status.as_str()))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn all_bookings_newest_first(conn: &mut SqliteConnection) -> Result<Vec<Booking>> {
    use schema::bookings::dsl;
    dsl::bookings
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}
