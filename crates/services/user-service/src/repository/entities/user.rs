//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use domain::{normalize_email, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_digest: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Email is stored trimmed and lower-cased regardless of what the caller set.
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let normalized = match &self.email {
            ActiveValue::Set(email) | ActiveValue::Unchanged(email) => Some(normalize_email(email)),
            ActiveValue::NotSet => None,
        };

        if let Some(email) = normalized {
            self.email = Set(email);
        }
        Ok(self)
    }
}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            password_digest: model.password_digest,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            email: Set(user.email),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            password_digest: Set(user.password_digest),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
    }
}
