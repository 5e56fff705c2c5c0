//! Authentication service - turns raw credentials into an identity.
//!
//! Failures are absence values and never say whether the email exists.
//! No attempt counters or lockout are kept, so repeated calls with the same
//! input always return the same result.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::client::UserServiceClient;
use common::{AppError, AppResult};
use domain::{normalize_email, HashCost, Password, User};
use user_service_lib::service::{derive_digest, verify_digest};

/// Plaintext behind the digest checked when no identity matches.
const PLACEHOLDER_SECRET: &str = "placeholder-credential";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Return the identity only when the email (trimmed, any case) exists and
    /// the password verifies against its digest.
    async fn authenticate_with_credentials(
        &self,
        raw_email: &str,
        raw_password: &str,
    ) -> AppResult<Option<User>>;
}

/// Concrete implementation of AuthService over the credential store.
pub struct Authenticator {
    user_client: Arc<dyn UserServiceClient>,
    cost: HashCost,
    placeholder: OnceCell<Password>,
}

impl Authenticator {
    /// Create new auth service instance.
    ///
    /// # Errors
    /// Rejects a cost Argon2 cannot use, so an unknown email can never fail
    /// differently from a wrong password.
    pub fn new(user_client: Arc<dyn UserServiceClient>, cost: HashCost) -> AppResult<Self> {
        cost.validate()
            .map_err(|e| AppError::configuration(format!("password hashing: {}", e)))?;

        Ok(Self {
            user_client,
            cost,
            placeholder: OnceCell::new(),
        })
    }

    /// Digest with the configured cost, derived on first use.
    async fn placeholder_digest(&self) -> AppResult<Password> {
        if let Some(digest) = self.placeholder.get() {
            return Ok(digest.clone());
        }

        let digest = derive_digest(PLACEHOLDER_SECRET.to_string(), self.cost).await?;
        // A concurrent first miss may have won; either digest is equivalent.
        let _ = self.placeholder.set(digest.clone());
        Ok(digest)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn authenticate_with_credentials(
        &self,
        raw_email: &str,
        raw_password: &str,
    ) -> AppResult<Option<User>> {
        let email = normalize_email(raw_email);

        match self.user_client.find_by_email(&email).await? {
            Some(user) => {
                if self.user_client.verify(&user, raw_password).await? {
                    tracing::debug!(user_id = %user.id, "Credentials accepted");
                    Ok(Some(user))
                } else {
                    tracing::debug!("Credentials rejected");
                    Ok(None)
                }
            }
            None => {
                // Same hashing work as a wrong password.
                let digest = self.placeholder_digest().await?;
                verify_digest(digest, raw_password.to_string()).await?;
                tracing::debug!("Credentials rejected");
                Ok(None)
            }
        }
    }
}
