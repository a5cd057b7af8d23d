use super::*;

impl_repo! {
    ReviewRepo {
        read {
            fn get_review(&self, id: Id) -> Result<Review>;
            fn get_review_by_approval_token(&self, token: &Nonce) -> Result<Review>;
            fn approved_reviews_newest_first(&self) -> Result<Vec<Review>>;
            fn count_reviews(&self) -> Result<usize>;
        }
        write {
            fn create_review(&self, review: &NewReview) -> Result<Id>;
            fn approve_review(&self, id: Id) -> Result<()>;
        }
    }
}

fn create_review(conn: &mut SqliteConnection, review: &NewReview) -> Result<Id> {
    let NewReview {
        tour_id,
        name,
        email,
        rating,
        review_text,
        approved,
        approval_token,
    } = review;
    let model = models::NewReview {
        tour_id: *tour_id,
        name,
        email: email.as_str(),
        rating: rating.value().into(),
        review_text,
        approved: *approved,
        approval_token: approval_token.as_ref().map(ToString::to_string),
        created_at: Timestamp::now().as_millis(),
    };
    diesel::insert_into(schema::reviews::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn get_review(conn: &mut SqliteConnection, id: Id) -> Result<Review> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::id.eq(id))
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn get_review_by_approval_token(conn: &mut SqliteConnection, token: &Nonce) -> Result<Review> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::approval_token.eq(token.to_string()))
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn approve_review(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::update(dsl::reviews.filter(dsl::id.eq(id)))
        .set((
            dsl::approved.eq(true),
            dsl::approval_token.eq(None::<String>),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn approved_reviews_newest_first(conn: &mut SqliteConnection) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::approved.eq(true))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn count_reviews(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::reviews::dsl;
    Ok(dsl::reviews
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
