//! User service - credential store business logic.
//!
//! Storage-independent checks run first and accumulate; email uniqueness is
//! checked against storage afterwards and again atomically by the store.
//! Digest derivation and verification run on the blocking pool.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    HashCost, Password, PasswordChange, ProfileUpdate, Registration, User, ValidationErrors,
    MSG_TAKEN,
};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new identity. Field errors are reported all at once.
    async fn register(&self, registration: Registration) -> AppResult<User>;

    /// Look up an identity regardless of the stored or queried casing
    async fn find_by_email_case_insensitive(&self, email: &str) -> AppResult<Option<User>>;

    /// Check a plaintext password against the identity's digest
    async fn verify(&self, user: &User, password: &str) -> AppResult<bool>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Change names and/or email
    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> AppResult<User>;

    /// Replace the digest with one derived from a new password
    async fn change_password(&self, id: Uuid, change: PasswordChange) -> AppResult<User>;

    /// List all identities
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Number of identities
    async fn count_users(&self) -> AppResult<u64>;
}

/// Derive a digest off the async runtime.
pub async fn derive_digest(plain_text: String, cost: HashCost) -> AppResult<Password> {
    let password = tokio::task::spawn_blocking(move || Password::new(&plain_text, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;
    Ok(password)
}

/// Verify a plaintext against a digest off the async runtime.
pub async fn verify_digest(digest: Password, plain_text: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || digest.verify(&plain_text))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    cost: HashCost,
}

impl UserManager {
    /// Create new user service instance with repository and digest cost
    pub fn new(repo: Arc<dyn UserRepository>, cost: HashCost) -> Self {
        Self { repo, cost }
    }

    /// Adds "has already been taken" when another identity owns the email.
    async fn check_email_available(
        &self,
        email: &str,
        except: Option<Uuid>,
        errors: &mut ValidationErrors,
    ) -> AppResult<()> {
        if email.is_empty() {
            return Ok(());
        }
        if let Some(existing) = self.repo.find_by_email(email).await? {
            if Some(existing.id) != except {
                errors.add("email", MSG_TAKEN);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, registration: Registration) -> AppResult<User> {
        let mut errors = registration.validate();
        let email = registration.normalized_email();
        self.check_email_available(&email, None, &mut errors).await?;
        errors.into_result(())?;

        let Registration {
            first_name,
            last_name,
            password,
            ..
        } = registration;

        let digest = derive_digest(password, self.cost).await?;
        let user = User::new(
            Uuid::new_v4(),
            &email,
            first_name,
            last_name,
            digest.into_string(),
        );

        let user = self.repo.create(user).await?;
        tracing::info!(user_id = %user.id, "Identity registered");
        Ok(user)
    }

    async fn find_by_email_case_insensitive(&self, email: &str) -> AppResult<Option<User>> {
        self.repo.find_by_email(email).await
    }

    async fn verify(&self, user: &User, password: &str) -> AppResult<bool> {
        verify_digest(user.password(), password.to_string()).await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> AppResult<User> {
        let mut user = self.get_user(id).await?;

        let mut errors = update.validate();
        let email = update.email.as_deref().map(domain::normalize_email);
        if let Some(email) = &email {
            self.check_email_available(email, Some(id), &mut errors).await?;
        }
        errors.into_result(())?;

        if let Some(email) = email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }

        self.repo.update(user).await
    }

    async fn change_password(&self, id: Uuid, change: PasswordChange) -> AppResult<User> {
        let mut user = self.get_user(id).await?;
        change.validate().into_result(())?;

        let digest = derive_digest(change.password, self.cost).await?;
        user.password_digest = digest.into_string();

        let user = self.repo.update(user).await?;
        tracing::info!(user_id = %user.id, "Password changed");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn count_users(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}
