//! Catalog repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use super::entities::{category, product};
use common::AppResult;
use domain::{Category, Product};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List categories by name
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Find category by ID
    async fn find_category(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// Insert a new category
    async fn create_category(&self, category: Category) -> AppResult<Category>;

    /// Count stored categories
    async fn count_categories(&self) -> AppResult<u64>;

    /// List products, newest first
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Insert a new product
    async fn create_product(&self, product: Product) -> AppResult<Product>;

    /// Delete product by ID; `false` when nothing matched
    async fn delete_product(&self, id: Uuid) -> AppResult<bool>;

    /// Count stored products
    async fn count_products(&self) -> AppResult<u64>;
}

/// Concrete implementation of CatalogRepository backed by SeaORM
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for CatalogStore {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn find_category(&self, id: Uuid) -> AppResult<Option<Category>> {
        let result = category::Entity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(Category::from))
    }

    async fn create_category(&self, category: Category) -> AppResult<Category> {
        let model = category::ActiveModel::from(category).insert(&self.db).await?;
        Ok(Category::from(model))
    }

    async fn count_categories(&self) -> AppResult<u64> {
        Ok(category::Entity::find().count(&self.db).await?)
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn create_product(&self, product: Product) -> AppResult<Product> {
        let model = product::ActiveModel::from(product).insert(&self.db).await?;
        Ok(Product::from(model))
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<bool> {
        let result = product::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn count_products(&self) -> AppResult<u64> {
        Ok(product::Entity::find().count(&self.db).await?)
    }
}
