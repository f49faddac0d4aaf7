//! Domain entities - core business objects

mod chirp;
mod refresh_token;
mod user;

pub use chirp::{Chirp, MAX_CHIRP_LENGTH};
pub use refresh_token::{RefreshToken, REFRESH_TOKEN_TTL_DAYS};
pub use user::User;
