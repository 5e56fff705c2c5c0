//! Catalog Service Library
//!
//! Categories and products for the admin surface. Creation is validation
//! only: field presence, numeric price and an existing category.

pub mod repository;
pub mod service;

pub use repository::{CatalogRepository, CatalogStore};
pub use service::{CatalogManager, CatalogService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MemoryCatalogStore;
