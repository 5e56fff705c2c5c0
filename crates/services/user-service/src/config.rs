//! User service configuration.

use common::{env_or, DatabaseConfig, PasswordHashingConfig};

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Storage for identities
    pub database: DatabaseConfig,
    /// Argon2 cost for newly derived digests
    pub hashing: PasswordHashingConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let db_defaults = DatabaseConfig::default();
        let hash_defaults = PasswordHashingConfig::default();

        Self {
            database: DatabaseConfig {
                url: env_or("DATABASE_URL", db_defaults.url),
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", db_defaults.max_connections),
                min_connections: env_or("DATABASE_MIN_CONNECTIONS", db_defaults.min_connections),
            },
            hashing: PasswordHashingConfig {
                memory_kib: env_or("PASSWORD_HASH_MEMORY_KIB", hash_defaults.memory_kib),
                iterations: env_or("PASSWORD_HASH_ITERATIONS", hash_defaults.iterations),
                parallelism: env_or("PASSWORD_HASH_PARALLELISM", hash_defaults.parallelism),
            },
        }
    }
}
