//! Authentication service business logic.

mod admin_gate;
mod auth_service;

pub use admin_gate::AdminGate;
pub use auth_service::{AuthService, Authenticator};
