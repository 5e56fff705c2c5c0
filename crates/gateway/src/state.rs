//! Application state for dependency injection.

use std::sync::Arc;

use async_trait::async_trait;

use auth_service_lib::{AdminGate, AuthService};
use catalog_service_lib::CatalogService;
use common::db::Database;
use user_service_lib::UserService;

/// Connectivity check reported by `/health`.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> Result<(), String>;
}

#[async_trait]
impl HealthProbe for Database {
    async fn ping(&self) -> Result<(), String> {
        Database::ping(self).await.map_err(|e| e.to_string())
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub auth: Arc<dyn AuthService>,
    pub catalog: Arc<dyn CatalogService>,
    pub admin_gate: Arc<AdminGate>,
    pub database: Arc<dyn HealthProbe>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        users: Arc<dyn UserService>,
        auth: Arc<dyn AuthService>,
        catalog: Arc<dyn CatalogService>,
        admin_gate: Arc<AdminGate>,
        database: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            users,
            auth,
            catalog,
            admin_gate,
            database,
        }
    }
}
