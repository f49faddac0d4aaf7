//! Database models - SQLx-compatible structs for PostgreSQL tables

mod chirp;
mod refresh_token;
mod user;

pub use chirp::ChirpModel;
pub use refresh_token::RefreshTokenModel;
pub use user::UserModel;
