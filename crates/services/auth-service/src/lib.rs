//! Auth Service Library
//!
//! Turns raw credentials into an authenticated identity and guards the admin
//! surface with a static credential pair. Identity lookups go through the
//! credential store in `user-service`.

pub mod client;
pub mod config;
pub mod service;

pub use client::{LocalUserClient, UserServiceClient};
pub use config::AuthServiceConfig;
pub use service::{AdminGate, AuthService, Authenticator};
