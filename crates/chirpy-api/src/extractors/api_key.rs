//! Polka API key extractor
//!
//! Polka signs its webhook calls with `Authorization: ApiKey <key>`. There is
//! no typed header for that scheme, so the header is parsed by hand and
//! checked against the configured key.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::response::ApiError;
use crate::state::AppState;

/// Proof that the request carried the configured Polka API key
#[derive(Debug, Clone, Copy)]
pub struct PolkaApiKey;

#[async_trait]
impl<S> FromRequestParts<S> for PolkaApiKey
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::MissingAuth)?;

        let key = header
            .strip_prefix("ApiKey ")
            .ok_or(ApiError::InvalidAuthFormat)?;

        let app_state = AppState::from_ref(state);
        if key != app_state.config().polka.api_key {
            tracing::warn!("Webhook rejected: wrong API key");
            return Err(ApiError::InvalidApiKey);
        }

        Ok(Self)
    }
}
