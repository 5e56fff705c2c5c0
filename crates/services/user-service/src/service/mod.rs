//! Service layer.

mod user_service;

pub use user_service::{derive_digest, verify_digest, UserManager, UserService};
