use super::*;
use gateways::notify::{NotificationEvent, NotificationGateway};

/// Settings for publishing reviews.
#[derive(Debug, Clone, Default)]
pub struct ReviewModeration {
    /// New reviews stay hidden until they have been approved.
    pub require_approval: bool,
    /// Public base URL of this server used for approval links.
    pub public_base_url: String,
}

impl ReviewModeration {
    pub fn approval_url(&self, token: &Nonce) -> String {
        format!(
            "{}/approve-review/{token}",
            self.public_base_url.trim_end_matches('/')
        )
    }
}

pub fn post_review(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    moderation: &ReviewModeration,
    req: usecases::PostReview,
) -> Result<Review> {
    let review = connections.exclusive()?.transaction(|conn| {
        usecases::post_review(conn, req, moderation.require_approval)
    })?;
    let approval_url = review
        .approval_token
        .as_ref()
        .map(|token| moderation.approval_url(token));
    notify.notify(NotificationEvent::ReviewSubmitted {
        review: &review,
        approval_url: approval_url.as_deref(),
    });
    Ok(review)
}

pub fn approve_review(connections: &sqlite::Connections, token: &str) -> Result<Review> {
    let review = connections
        .exclusive()?
        .transaction(|conn| usecases::approve_review_with_token(conn, token))?;
    Ok(review)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn review() -> usecases::PostReview {
        usecases::PostReview {
            name: "Emma Thompson".into(),
            email: "emma@example.com".into(),
            rating: 5,
            review_text: "Best safari experience we've ever had!".into(),
            ..Default::default()
        }
    }

    #[test]
    fn publish_review_immediately() {
        let fixture = BackendFixture::new();
        let moderation = flows::ReviewModeration::default();
        let review =
            flows::post_review(&fixture.db_connections, &fixture.notify, &moderation, review())
                .unwrap();
        assert!(review.approved);
        assert_eq!(
            fixture.notify.events(),
            vec![format!("review {} approval None", review.id)]
        );
    }

    #[test]
    fn approve_review_by_link() {
        let fixture = BackendFixture::new();
        let moderation = flows::ReviewModeration {
            require_approval: true,
            public_base_url: "http://localhost:5000/".into(),
        };
        let review =
            flows::post_review(&fixture.db_connections, &fixture.notify, &moderation, review())
                .unwrap();
        assert!(!review.approved);
        let token = review.approval_token.unwrap();
        let url = format!("http://localhost:5000/approve-review/{token}");
        assert_eq!(
            fixture.notify.events(),
            vec![format!("review {} approval Some({url:?})", review.id)]
        );
        let db = fixture.db_connections.shared().unwrap();
        assert!(usecases::approved_reviews(&db).unwrap().is_empty());
        drop(db);

        let approved = flows::approve_review(&fixture.db_connections, &token.to_string()).unwrap();
        assert!(approved.approved);
        assert!(approved.approval_token.is_none());

        // A token can only be used once
        assert!(matches!(
            flows::approve_review(&fixture.db_connections, &token.to_string()),
            Err(AppError::Business(BError::Parameter(usecases::Error::ReviewNotFound)))
        ));
    }
}
