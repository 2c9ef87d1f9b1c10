//! Bearer-token issuance and validation.
//!
//! Tokens are HS256 JWTs carrying the account id as `sub` with a fixed 7-day
//! expiry. The signing keys are built once from the configured secret and held
//! in [`JwtKeys`] inside the application state; there is no process-global key
//! storage. Validation pins the algorithm to HS256.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed session lifetime.
pub const TOKEN_TTL_DAYS: i64 = 7;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id as a UUID string.
    pub sub: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// Encoding/decoding keys derived from the configured secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a session token for the given account.
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_token_with_ttl(user_id, Duration::days(TOKEN_TTL_DAYS))
    }

    fn issue_token_with_ttl(
        &self,
        user_id: Uuid,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding)
    }

    /// Validate signature and expiry, returning the decoded claims.
    pub fn validate_token(
        &self,
        token: &str,
    ) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        let validation = Validation::new(JWT_ALGORITHM);
        decode::<Claims>(token, &self.decoding, &validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::from_secret("test-secret")
    }

    #[test]
    fn test_issue_and_validate() {
        let user_id = Uuid::new_v4();
        let token = keys().issue_token(user_id).unwrap();

        let data = keys().validate_token(&token).unwrap();
        assert_eq!(data.claims.sub, user_id.to_string());
        assert!(data.claims.exp > data.claims.iat);
    }

    #[test]
    fn test_expiry_is_seven_days_out() {
        let token = keys().issue_token(Uuid::new_v4()).unwrap();
        let data = keys().validate_token(&token).unwrap();

        let lifetime = data.claims.exp - data.claims.iat;
        assert_eq!(lifetime, Duration::days(TOKEN_TTL_DAYS).num_seconds());
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = keys();
        let token = keys
            .issue_token_with_ttl(Uuid::new_v4(), Duration::days(-1))
            .unwrap();

        assert!(keys.validate_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = keys().issue_token(Uuid::new_v4()).unwrap();
        let other = JwtKeys::from_secret("another-secret");
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = keys().issue_token(Uuid::new_v4()).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(keys().validate_token(&tampered).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(keys().validate_token("not-a-jwt").is_err());
    }
}
