use std::sync::Arc;

use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};

use crate::core::{gateways::notify::NotificationGateway, prelude::*};
use wildbeat_application::prelude as flows;
use wildbeat_core::usecases::Error as ParameterError;
use wildbeat_db_sqlite::Connections;

pub const STRIPE_SIGNATURE_HEADER: &str = "Stripe-Signature";

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let (scheme, token) = auth_header_val.trim().split_once(' ')?;
    let token = token.trim();
    (scheme == "Bearer" && !token.is_empty()).then_some(token)
}

/// The bearer token of a request, if any.
///
/// The guard never fails: routes decide whether they
/// require an authenticated user or an admin.
#[derive(Debug)]
pub struct Auth {
    bearer_token: Option<String>,
}

impl Auth {
    pub fn token(&self) -> std::result::Result<Nonce, ParameterError> {
        self.bearer_token
            .as_deref()
            .ok_or(ParameterError::Unauthorized)?
            .parse()
            .map_err(|_| ParameterError::TokenInvalid)
    }

    pub fn user(&self, connections: &Connections) -> Result<User> {
        flows::authorize_user(connections, &self.token()?)
    }

    pub fn admin(&self, connections: &Connections) -> Result<User> {
        flows::authorize_admin(connections, &self.token()?)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_token = request
            .headers()
            .get("Authorization")
            .find_map(get_bearer_token)
            .map(ToOwned::to_owned);
        Outcome::Success(Self { bearer_token })
    }
}

/// Value of the `Stripe-Signature` header.
#[derive(Debug)]
pub struct StripeSignature(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for StripeSignature {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let signature = request
            .headers()
            .get_one(STRIPE_SIGNATURE_HEADER)
            .unwrap_or_default()
            .to_owned();
        Outcome::Success(Self(signature))
    }
}

pub struct Notify(pub Arc<dyn NotificationGateway + Send + Sync>);

impl Notify {
    pub fn gateway(&self) -> &(dyn NotificationGateway + Send + Sync) {
        &*self.0
    }
}

pub struct Version(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bearer_token() {
        assert_eq!(get_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(get_bearer_token("  Bearer   abc "), Some("abc"));
        assert_eq!(get_bearer_token("Basic abc"), None);
        assert_eq!(get_bearer_token("Bearer"), None);
        assert_eq!(get_bearer_token("Bearer "), None);
    }

    #[test]
    fn missing_token_is_unauthorized() {
        let auth = Auth { bearer_token: None };
        assert!(matches!(auth.token(), Err(ParameterError::Unauthorized)));
        let auth = Auth {
            bearer_token: Some("not-a-nonce".into()),
        };
        assert!(matches!(auth.token(), Err(ParameterError::TokenInvalid)));
    }
}
