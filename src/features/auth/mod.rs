//! Bearer token authentication.
//!
//! The auth middleware runs `TokenService` then `UserResolver` before any
//! protected handler sees the request body, and attaches the resulting
//! `AuthenticatedUser` to the request extensions.

pub mod model;
pub mod services;

pub use services::{AuthService, TokenService, UserResolver};
