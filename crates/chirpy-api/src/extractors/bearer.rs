//! Raw bearer token extractor
//!
//! The refresh and revoke endpoints carry the opaque refresh token in the
//! Authorization header. This extractor hands over the bearer value without
//! interpreting it; the service layer decides whether it is a live token.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;

/// The uninterpreted value of an `Authorization: Bearer` header
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        Ok(Self(bearer.token().to_string()))
    }
}
