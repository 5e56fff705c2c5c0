//! In-process client for user-service.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::User;
use user_service_lib::UserService;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential store operations needed by auth-service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserServiceClient: Send + Sync {
    /// Find identity by already-normalized email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Check a plaintext password against the identity's digest
    async fn verify(&self, user: &User, password: &str) -> AppResult<bool>;
}

/// Client that calls a [`UserService`] living in the same process.
pub struct LocalUserClient {
    users: Arc<dyn UserService>,
}

impl LocalUserClient {
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserServiceClient for LocalUserClient {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users.find_by_email_case_insensitive(email).await
    }

    async fn verify(&self, user: &User, password: &str) -> AppResult<bool> {
        self.users.verify(user, password).await
    }
}
