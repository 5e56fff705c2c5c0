//! Repository layer for data access.

mod catalog_repository;
pub mod entities;
#[cfg(any(test, feature = "test-utils"))]
mod memory;

pub use catalog_repository::{CatalogRepository, CatalogStore};
#[cfg(any(test, feature = "test-utils"))]
pub use catalog_repository::MockCatalogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryCatalogStore;
