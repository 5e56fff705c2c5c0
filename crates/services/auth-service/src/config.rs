//! Auth service configuration.

use common::{env_opt, env_or, AdminConfig, PasswordHashingConfig};

/// Auth service configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Static pair for the admin gate
    pub admin: AdminConfig,
    /// Cost used for the placeholder digest checked on unknown emails
    pub hashing: PasswordHashingConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let hash_defaults = PasswordHashingConfig::default();

        Self {
            admin: AdminConfig {
                username: env_opt("ADMIN_USERNAME"),
                password: env_opt("ADMIN_PASSWORD"),
            },
            hashing: PasswordHashingConfig {
                memory_kib: env_or("PASSWORD_HASH_MEMORY_KIB", hash_defaults.memory_kib),
                iterations: env_or("PASSWORD_HASH_ITERATIONS", hash_defaults.iterations),
                parallelism: env_or("PASSWORD_HASH_PARALLELISM", hash_defaults.parallelism),
            },
        }
    }
}
