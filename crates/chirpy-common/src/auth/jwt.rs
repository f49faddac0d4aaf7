//! JWT utilities for authentication
//!
//! Provides access token encoding, decoding, and validation using the `jsonwebtoken` crate.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Issuer claim stamped into every access token
pub const TOKEN_ISSUER: &str = "chirpy";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID from the subject claim
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    ///
    /// The boundary is closed: a token is live only while `exp` lies in the
    /// future, so one whose `exp` equals the current second is already dead.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// JWT service for issuing and validating access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and access token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Issue an access token for a user with the configured lifetime
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_access_token_with_expiry(user_id, self.access_token_expiry)
    }

    /// Issue an access token with an explicit lifetime in seconds
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token_with_expiry(
        &self,
        user_id: Uuid,
        expires_in: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expires_in)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns an error if the token is malformed, signed with a different
    /// secret, issued by someone else, or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[TOKEN_ISSUER]);
        // No grace window on expiry
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::InvalidSignature,
                _ => AppError::InvalidToken,
            }
        })?;

        // jsonwebtoken still accepts a token during the second `exp` names, so
        // a zero-lifetime token would verify if issued and checked within the
        // same second. Re-check the closed boundary ourselves.
        if token_data.claims.is_expired() {
            return Err(AppError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    /// Validate an access token and return the user ID it was issued to
    ///
    /// # Errors
    /// Returns an error if the token fails validation or carries a non-UUID subject
    pub fn verify_access_token(&self, token: &str) -> Result<Uuid, AppError> {
        self.decode_token(token)?.user_id()
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}
