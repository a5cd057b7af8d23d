use super::{not_found_as, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};

/// A booking request as submitted by a visitor.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct BookTour {
    pub tour_id          : Option<Id>,
    pub name             : String,
    pub email            : String,
    pub phone            : Option<String>,
    pub date             : String,
    pub guests           : i64,
    pub special_requests : Option<String>,
    pub total_price      : Option<f64>,
}

pub fn create_booking<R>(repo: &R, req: BookTour) -> Result<(Booking, Option<Tour>)>
where
    R: TourRepo + BookingRepo,
{
    let email = req.email.parse::<EmailAddress>()?;
    let date = req.date.parse::<BookingDate>()?;
    let guests = u32::try_from(req.guests)
        .ok()
        .filter(|g| *g >= 1)
        .ok_or(Error::Guests)?;
    let tour = req
        .tour_id
        .map(|id| {
            repo.get_tour(id)
                .map_err(|err| not_found_as(err, Error::TourNotFound))
        })
        .transpose()?;
    let total_price = req
        .total_price
        .or_else(|| tour.as_ref().map(|t| t.price * f64::from(guests)));
    let new_booking = NewBooking {
        tour_id: req.tour_id,
        name: req.name,
        email,
        phone: req.phone,
        date,
        guests,
        special_requests: req.special_requests,
        status: BookingStatus::Pending,
        total_price,
    }
    .auto_correct();
    new_booking.validate()?;
    let id = repo.create_booking(&new_booking)?;
    log::info!("New booking {id} for {} guest(s) on {}", guests, new_booking.date);
    let booking = repo.get_booking(id)?;
    Ok((booking, tour))
}

pub fn all_bookings<R: BookingRepo>(repo: &R) -> Result<Vec<Booking>> {
    Ok(repo.all_bookings_newest_first()?)
}

pub fn change_booking_status<R: BookingRepo>(repo: &R, id: Id, status: &str) -> Result<()> {
    let status = status
        .trim()
        .to_lowercase()
        .parse::<BookingStatus>()
        .map_err(|_| Error::BookingStatus)?;
    let booking = repo
        .get_booking(id)
        .map_err(|err| not_found_as(err, Error::BookingNotFound))?;
    if booking.status != status {
        log::debug!("Changing status of booking {id} from {} to {status}", booking.status);
        repo.update_booking_status(id, status)?;
    }
    Ok(())
}
