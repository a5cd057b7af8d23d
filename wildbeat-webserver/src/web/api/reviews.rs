use super::*;

#[get("/reviews")]
pub fn get_reviews(db: &State<Connections>) -> Result<Vec<json::Review>> {
    let reviews = usecases::approved_reviews(&db.shared()?)?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

#[post("/reviews", data = "<review>")]
pub fn post_review(
    db: &State<Connections>,
    notify: &State<Notify>,
    cfg: &State<Cfg>,
    review: JsonResult<json::NewReview>,
) -> Result<json::Created> {
    let review = from_json::post_review(review?.into_inner());
    let review = flows::post_review(db, notify.gateway(), &cfg.review_moderation, review)?;
    Ok(created(review.id, "Review posted successfully"))
}
