//! User repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{normalize_email, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations enforce email uniqueness atomically. A violation is a
/// storage error like any other; the friendly field error comes from the
/// service's own check before writing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email, ignoring case and surrounding whitespace
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user
    async fn create(&self, user: User) -> AppResult<User>;

    /// Overwrite an existing user's mutable fields
    async fn update(&self, user: User) -> AppResult<User>;

    /// List all users, oldest first
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Count stored users
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(user::Column::Email))).eq(normalize_email(email)))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let active_model = ActiveModel::from(user);

        let model = active_model.insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        if UserEntity::find_by_id(user.id).one(&self.db).await?.is_none() {
            return Err(AppError::NotFound);
        }

        let mut active = ActiveModel::from(user);
        active.updated_at = sea_orm::Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(UserEntity::find().count(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Statement, Value};

    fn model(email: &str) -> user::Model {
        let now = chrono::Utc::now();
        user::Model {
            id: Uuid::new_v4(),
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_digest: "digest".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn statements(store: UserStore) -> Vec<Statement> {
        store
            .db
            .into_transaction_log()
            .into_iter()
            .flat_map(|txn| txn.statements().to_vec())
            .collect()
    }

    fn binds(statement: &Statement, value: &str) -> bool {
        statement
            .values
            .as_ref()
            .is_some_and(|values| values.0.contains(&Value::from(value)))
    }

    #[tokio::test]
    async fn test_create_persists_normalized_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("foo@bar.com")]])
            .into_connection();
        let store = UserStore::new(db);

        let raw = User::from(model("  Foo@BAR.com "));
        store.create(raw).await.unwrap();

        let log = statements(store);
        assert_eq!(log.len(), 1);
        assert!(log[0].sql.starts_with("INSERT INTO"));
        assert!(binds(&log[0], "foo@bar.com"));
        assert!(!binds(&log[0], "  Foo@BAR.com "));
    }

    #[tokio::test]
    async fn test_find_by_email_filters_on_lowered_column() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("foo@bar.com")]])
            .into_connection();
        let store = UserStore::new(db);

        let found = store.find_by_email("  FOO@bar.com ").await.unwrap();
        assert_eq!(found.map(|u| u.email), Some("foo@bar.com".to_string()));

        let log = statements(store);
        assert_eq!(log.len(), 1);
        assert!(log[0].sql.to_lowercase().contains(r#"lower("email")"#));
        assert!(binds(&log[0], "foo@bar.com"));
    }

    #[tokio::test]
    async fn test_duplicate_insert_propagates_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_users_email_lower\""
                    .to_string(),
            )])
            .into_connection();
        let store = UserStore::new(db);

        let result = store.create(User::from(model("race@x.com"))).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
