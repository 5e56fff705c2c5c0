//! Service layer.

mod catalog_service;

pub use catalog_service::{CatalogCounts, CatalogManager, CatalogService};
