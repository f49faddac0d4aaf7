//! Axum extractors for request handling
//!
//! Custom extractors for authentication, the Polka API key, and validation.

mod api_key;
mod auth;
mod bearer;
mod validated;

pub use api_key::PolkaApiKey;
pub use auth::AuthUser;
pub use bearer::BearerToken;
pub use validated::ValidatedJson;
