use super::{not_found_as, prelude::*};
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct PostReview {
    pub tour_id     : Option<Id>,
    pub name        : String,
    pub email       : String,
    pub rating      : i64,
    pub review_text : String,
}

pub fn approved_reviews<R: ReviewRepo>(repo: &R) -> Result<Vec<Review>> {
    Ok(repo.approved_reviews_newest_first()?)
}

/// Stores a new review.
///
/// If an approval is required the review stays hidden until
/// it has been approved with the returned approval token.
pub fn post_review<R>(repo: &R, req: PostReview, require_approval: bool) -> Result<Review>
where
    R: TourRepo + ReviewRepo,
{
    let rating = u8::try_from(req.rating)
        .ok()
        .and_then(Rating::new)
        .ok_or(Error::RatingValue)?;
    let email = req.email.parse::<EmailAddress>()?;
    if let Some(tour_id) = req.tour_id {
        repo.get_tour(tour_id)
            .map_err(|err| not_found_as(err, Error::TourNotFound))?;
    }
    let new_review = NewReview {
        tour_id: req.tour_id,
        name: req.name.trim().to_owned(),
        email,
        rating,
        review_text: req.review_text.trim().to_owned(),
        approved: !require_approval,
        approval_token: require_approval.then(Nonce::new),
    };
    new_review.validate()?;
    let id = repo.create_review(&new_review)?;
    log::info!(
        "New review {id} with rating {} (approved = {})",
        rating.value(),
        new_review.approved
    );
    Ok(repo.get_review(id)?)
}

pub fn approve_review_with_token<R: ReviewRepo>(repo: &R, token: &str) -> Result<Review> {
    let token = token
        .parse::<Nonce>()
        .map_err(|_| Error::ReviewNotFound)?;
    let review = repo
        .get_review_by_approval_token(&token)
        .map_err(|err| not_found_as(err, Error::ReviewNotFound))?;
    repo.approve_review(review.id)?;
    log::info!("Approved review {}", review.id);
    Ok(repo.get_review(review.id)?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn review(rating: i64) -> PostReview {
        PostReview {
            name: "Emma Thompson".into(),
            email: "emma@example.com".into(),
            rating,
            review_text: "Best safari experience we've ever had!".into(),
            ..Default::default()
        }
    }

    #[test]
    fn post_visible_review() {
        let db = MockDb::default();
        let review = post_review(&db, review(5), false).unwrap();
        assert!(review.approved);
        assert!(review.approval_token.is_none());
        assert_eq!(approved_reviews(&db).unwrap().len(), 1);
    }

    #[test]
    fn rating_out_of_range() {
        let db = MockDb::default();
        for rating in [0, 6, -1, 256] {
            assert!(matches!(
                post_review(&db, review(rating), false),
                Err(Error::RatingValue)
            ));
        }
    }

    #[test]
    fn reject_empty_text_and_unknown_tour() {
        let db = MockDb::default();
        let mut req = review(4);
        req.review_text = "  ".into();
        assert!(matches!(
            post_review(&db, req, false),
            Err(Error::EmptyReviewText)
        ));
        let mut req = review(4);
        req.tour_id = Some(7);
        assert!(matches!(
            post_review(&db, req, false),
            Err(Error::TourNotFound)
        ));
    }

    #[test]
    fn approve_hidden_review() {
        let db = MockDb::default();
        let review = post_review(&db, review(5), true).unwrap();
        assert!(!review.approved);
        assert!(approved_reviews(&db).unwrap().is_empty());

        let token = review.approval_token.unwrap().to_string();
        let approved = approve_review_with_token(&db, &token).unwrap();
        assert!(approved.approved);
        assert!(approved.approval_token.is_none());
        assert_eq!(approved_reviews(&db).unwrap().len(), 1);

        // The token can only be used once
        assert!(matches!(
            approve_review_with_token(&db, &token),
            Err(Error::ReviewNotFound)
        ));
        assert!(matches!(
            approve_review_with_token(&db, "invalid"),
            Err(Error::ReviewNotFound)
        ));
    }
}
