//! Access-token handling.
//!
//! Tokens are HS256-signed JWTs minted by the platform's account service;
//! this service validates them on incoming requests and only mints its own
//! in tests. The [`Claims`] payload carries the user id and role the
//! booking endpoints authorize against.

use confera_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::env_parse;

/// Claims payload of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued to.
    pub sub: DbId,
    /// Role name, e.g. `"organizer"`.
    pub role: String,
    /// Expiry (Unix seconds, UTC).
    pub exp: i64,
    /// Issue time (Unix seconds, UTC).
    pub iat: i64,
    /// Token id (UUID v4), kept for audit trails.
    pub jti: String,
}

/// Signing and validation settings for access tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret.
    pub secret: String,
    /// Token lifetime in minutes.
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` and `JWT_ACCESS_EXPIRY_MINS` (default 15) from the
    /// environment.
    ///
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is missing or empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self {
            secret,
            access_token_expiry_mins: env_parse("JWT_ACCESS_EXPIRY_MINS", "15"),
        }
    }

    /// Mint an access token for `user_id` with the given role. Each token
    /// gets a fresh `jti`.
    pub fn issue_access_token(
        &self,
        user_id: DbId,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role: role.to_owned(),
            exp: iat + self.access_token_expiry_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        };

        // Header::default() is HS256.
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Check signature and expiry, returning the claims on success.
    pub fn decode_access_token(
        &self,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}
