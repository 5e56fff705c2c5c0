//! Middleware for the admin surface.

mod admin_auth;

pub use admin_auth::{admin_auth_middleware, basic_credentials};
