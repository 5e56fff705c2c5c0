//! In-memory user store for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{normalize_email, User};
use sea_orm::DbErr;

use super::UserRepository;

/// Vec-backed [`UserRepository`] with the same email normalization and
/// uniqueness rules as the database store.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(users: &[User], email: &str, except: Option<Uuid>) -> bool {
    users
        .iter()
        .any(|u| Some(u.id) != except && normalize_email(&u.email) == email)
}

/// What the unique `lower(email)` index raises on a racing write.
fn unique_violation() -> AppError {
    AppError::Database(DbErr::Custom(
        "duplicate key value violates unique constraint \"idx_users_email_lower\"".to_string(),
    ))
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = normalize_email(email);
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| normalize_email(&u.email) == email)
            .cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        user.email = normalize_email(&user.email);

        let mut users = self.users.write().await;
        if email_taken(&users, &user.email, None) {
            return Err(unique_violation());
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, mut user: User) -> AppResult<User> {
        user.email = normalize_email(&user.email);
        user.updated_at = chrono::Utc::now();

        let mut users = self.users.write().await;
        if email_taken(&users, &user.email, Some(user.id)) {
            return Err(unique_violation());
        }
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AppError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}
