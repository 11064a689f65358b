use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use crate::modules::auth::core::claims::{Claims, Identity};
use crate::modules::users::core::user::User;
use crate::shared::core::clock::Clock;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token could not be signed: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Rejected(jsonwebtoken::errors::Error),

    #[error("token subject is not a user id")]
    InvalidSubject,

    #[error("token expired")]
    Expired,
}

/// Issues and validates HS256 bearer tokens carrying `{sub: user id, email}`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            clock,
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = self.clock.now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    pub fn validate(&self, token: &str) -> Result<Identity, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // Expiry is checked against our clock below.
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(TokenError::Rejected)?;
        let claims = data.claims;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(TokenError::Expired);
        }
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| TokenError::InvalidSubject)?;
        Ok(Identity {
            user_id,
            email: claims.email,
        })
    }
}
