//! API Gateway Library
//!
//! The HTTP surface of the storefront backend. Services run in-process and
//! are reached through trait objects held in [`state::AppState`].

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use auth_service_lib::{AdminGate, Authenticator, LocalUserClient};
use catalog_service_lib::{CatalogManager, CatalogStore};
use common::db::Database;
use common::AppResult;
use user_service_lib::{UserManager, UserService, UserStore};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wire every service onto one database connection.
///
/// Fails with a configuration error when a hashing cost is unusable.
pub fn build_state(db: Database, config: &GatewayConfig) -> AppResult<AppState> {
    let conn = db.get_connection();

    let users: Arc<dyn UserService> = Arc::new(UserManager::new(
        Arc::new(UserStore::new(conn.clone())),
        config.users.hashing.validated_cost()?,
    ));
    let auth = Arc::new(Authenticator::new(
        Arc::new(LocalUserClient::new(users.clone())),
        config.auth.hashing.validated_cost()?,
    )?);
    let catalog = Arc::new(CatalogManager::new(Arc::new(CatalogStore::new(conn))));
    let admin_gate = Arc::new(AdminGate::new(config.auth.admin.clone()));

    Ok(AppState::new(users, auth, catalog, admin_gate, Arc::new(db)))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.users.database).await?;

    let state = build_state(db, &config)?;

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &GatewayConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.users.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
