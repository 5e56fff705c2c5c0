//! Gateway configuration.

use auth_service_lib::AuthServiceConfig;
use common::{env_or, ServiceConfig};
use user_service_lib::UserServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// HTTP listener
    pub service: ServiceConfig,
    /// Credential store (database, hashing cost)
    pub users: UserServiceConfig,
    /// Authenticator and admin gate
    pub auth: AuthServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service_name,
                host: env_or("GATEWAY_HOST", defaults.host),
                port: env_or("GATEWAY_PORT", defaults.port),
            },
            users: UserServiceConfig::from_env(),
            auth: AuthServiceConfig::from_env(),
        }
    }
}
