//! Shared types, errors, and configuration for Splitter.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - JWT claims and token handling

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

#[cfg(test)]
mod error_tests;

pub use auth::{Claims, LoginResponse, RegisterResponse};
pub use config::AppConfig;
pub use error::{AppError, FieldErrors};
pub use jwt::{JwtConfig, JwtError, JwtService};
