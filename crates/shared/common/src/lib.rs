//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified error handling with HTTP rendering
//! - Configuration structures
//! - Database connection and migrations (feature `database`)

pub mod config;
#[cfg(feature = "database")]
pub mod db;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
