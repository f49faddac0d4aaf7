//! # chirpy-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface for the API layer
pub use services::{
    AuthService, ChirpService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    UserService, WebhookService,
};
