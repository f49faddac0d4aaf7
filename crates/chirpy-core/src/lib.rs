//! # chirpy-core
//!
//! Domain layer containing entities, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Chirp, RefreshToken, User, MAX_CHIRP_LENGTH, REFRESH_TOKEN_TTL_DAYS};
pub use error::DomainError;
pub use traits::{ChirpRepository, RefreshTokenRepository, RepoResult, UserRepository};
