use super::*;
use gateways::notify::{NotificationEvent, NotificationGateway};

pub fn create_booking(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    req: usecases::BookTour,
) -> Result<Booking> {
    let (booking, tour) = connections.exclusive()?.transaction(|conn| {
        usecases::create_booking(conn, req).map_err(|err| {
            warn!("Failed to create booking: {err}");
            err
        })
    })?;

    // Notify after the transaction has been committed
    notify.notify(NotificationEvent::BookingCreated {
        booking: &booking,
        tour: tour.as_ref(),
    });

    Ok(booking)
}

pub fn change_booking_status(
    connections: &sqlite::Connections,
    id: Id,
    status: &str,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::change_booking_status(conn, id, status))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn book(tour_id: Option<Id>) -> usecases::BookTour {
        usecases::BookTour {
            tour_id,
            name: "Sarah Johnson".into(),
            email: "sarah@example.com".into(),
            date: "2025-07-01".into(),
            guests: 2,
            ..Default::default()
        }
    }

    #[test]
    fn create_booking_and_notify() {
        let fixture = BackendFixture::new();
        let tour_id = fixture.create_tour("Serengeti Migration Safari", 2500.0);
        let booking =
            flows::create_booking(&fixture.db_connections, &fixture.notify, book(Some(tour_id)))
                .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_price, Some(5000.0));
        assert_eq!(
            fixture.notify.events(),
            vec![format!("booking {} for {tour_id}", booking.id)]
        );
    }

    #[test]
    fn unknown_tour_is_not_booked() {
        let fixture = BackendFixture::new();
        let res = flows::create_booking(&fixture.db_connections, &fixture.notify, book(Some(42)));
        assert!(matches!(
            res,
            Err(AppError::Business(BError::Parameter(usecases::Error::TourNotFound)))
        ));
        assert!(fixture.notify.events().is_empty());
    }

    #[test]
    fn change_status() {
        let fixture = BackendFixture::new();
        let booking =
            flows::create_booking(&fixture.db_connections, &fixture.notify, book(None)).unwrap();
        flows::change_booking_status(&fixture.db_connections, booking.id, "confirmed").unwrap();
        let bookings = usecases::all_bookings(&fixture.db_connections.shared().unwrap()).unwrap();
        assert_eq!(bookings[0].status, BookingStatus::Confirmed);
        assert!(flows::change_booking_status(&fixture.db_connections, booking.id, "done").is_err());
    }
}
