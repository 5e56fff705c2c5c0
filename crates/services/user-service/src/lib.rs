//! User Service Library
//!
//! The credential store: identities, their password digests, registration
//! and case-insensitive lookup. Called in-process by the authenticator and
//! the HTTP gateway through the [`UserService`] trait.

pub mod config;
pub mod repository;
pub mod service;

pub use config::UserServiceConfig;
pub use repository::{UserRepository, UserStore};
pub use service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MemoryUserStore;
