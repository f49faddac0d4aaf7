//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, TOKEN_ISSUER};
pub use password::{hash_password, verify_password, DUMMY_PASSWORD_HASH};
