//! Entity to model mappers
//!
//! Conversions from database models to domain entities (chirpy-core).
//! Repositories bind entity fields directly on insert, so only the
//! `From<Model> for Entity` direction lives here.

mod chirp;
mod refresh_token;
mod user;
