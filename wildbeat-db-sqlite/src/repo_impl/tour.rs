use super::*;

impl_repo! {
    TourRepo {
        read {
            fn get_tour(&self, id: Id) -> Result<Tour>;
            fn all_tours(&self) -> Result<Vec<Tour>>;
            fn count_tours(&self) -> Result<usize>;
        }
        write {
            fn create_tour(&self, tour: &NewTour) -> Result<Id>;
        }
    }
}

fn create_tour(conn: &mut SqliteConnection, tour: &NewTour) -> Result<Id> {
    let NewTour {
        title,
        description,
        price,
        duration,
        group_size,
        location,
        highlights,
        image_url,
        rating,
    } = tour;
    let model = models::NewTour {
        title,
        description: description.as_deref(),
        price: *price,
        duration: duration.as_deref(),
        group_size: group_size.as_deref(),
        location: location.as_deref(),
        highlights: join_list(highlights.as_slice()),
        image_url: image_url.as_deref(),
        rating: *rating,
        created_at: Timestamp::now().as_millis(),
    };
    diesel::insert_into(schema::tours::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn get_tour(conn: &mut SqliteConnection, id: Id) -> Result<Tour> {
    use schema::tours::dsl;
    Ok(dsl::tours
        .filter(dsl::id.eq(id))
        .first::<models::TourEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_tours(conn: &mut SqliteConnection) -> Result<Vec<Tour>> {
    use schema::tours::dsl;
    Ok(dsl::tours
        .order_by((dsl::created_at, dsl::id))
        .load::<models::TourEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_tours(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::tours::dsl;
    Ok(dsl::tours
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
