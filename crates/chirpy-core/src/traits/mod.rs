//! Repository traits (ports)

mod repositories;

pub use repositories::{ChirpRepository, RefreshTokenRepository, RepoResult, UserRepository};
