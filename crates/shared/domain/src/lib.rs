//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! identities and their password digests, the catalog entities, and the
//! field-level checks that guard them.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod password;
pub mod user;
pub mod validation;

pub use catalog::{Category, NewCategory, NewProduct, Product};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::{HashCost, Password};
pub use user::{
    normalize_email, PasswordChange, ProfileUpdate, Registration, User, UserResponse,
};
pub use validation::{Check, ValidationErrors};
