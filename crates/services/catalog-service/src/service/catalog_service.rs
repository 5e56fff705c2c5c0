//! Catalog service - validation-only creation and listing.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Category, NewCategory, NewProduct, Product, MSG_MUST_EXIST};

use crate::repository::CatalogRepository;

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCounts {
    pub categories: u64,
    pub products: u64,
}

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Create a category; the name must not be blank
    async fn create_category(&self, input: NewCategory) -> AppResult<Category>;

    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Create a product. Every field error is reported at once, including
    /// an unknown category.
    async fn create_product(&self, input: NewProduct) -> AppResult<Product>;

    /// Delete a product; `NotFound` when the ID is unknown
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;

    async fn counts(&self) -> AppResult<CatalogCounts>;
}

/// Concrete implementation of CatalogService using repository.
pub struct CatalogManager {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogManager {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.repo.list_categories().await
    }

    async fn create_category(&self, input: NewCategory) -> AppResult<Category> {
        input.validate().into_result(())?;

        let name = input.name.unwrap_or_default().trim().to_string();
        let category = Category {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        };

        let category = self.repo.create_category(category).await?;
        tracing::info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.repo.list_products().await
    }

    async fn create_product(&self, input: NewProduct) -> AppResult<Product> {
        let mut errors = input.validate();
        if let Some(category_id) = input.category_id {
            if self.repo.find_category(category_id).await?.is_none() {
                errors.add("category", MSG_MUST_EXIST);
            }
        }
        errors.into_result(())?;

        let (Some(name), Some(price_cents), Some(quantity), Some(category_id)) = (
            input.name,
            input.price_cents,
            input.quantity,
            input.category_id,
        ) else {
            return Err(AppError::internal("Product passed checks with missing fields"));
        };

        let product = Product {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            description: input.description,
            price_cents,
            quantity,
            category_id,
            created_at: Utc::now(),
        };

        let product = self.repo.create_product(product).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        if !self.repo.delete_product(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn counts(&self) -> AppResult<CatalogCounts> {
        Ok(CatalogCounts {
            categories: self.repo.count_categories().await?,
            products: self.repo.count_products().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryCatalogStore, MockCatalogRepository};

    fn manager() -> CatalogManager {
        CatalogManager::new(Arc::new(MemoryCatalogStore::new()))
    }

    async fn category(service: &CatalogManager) -> Category {
        service
            .create_category(NewCategory {
                name: Some("Electronics".to_string()),
            })
            .await
            .unwrap()
    }

    fn new_product(category_id: Option<Uuid>) -> NewProduct {
        NewProduct {
            name: Some("Lamp".to_string()),
            description: Some("Bright".to_string()),
            price_cents: Some(1999),
            quantity: Some(3),
            category_id,
        }
    }

    #[tokio::test]
    async fn test_create_product_in_existing_category() {
        let service = manager();
        let category = category(&service).await;

        let product = service
            .create_product(new_product(Some(category.id)))
            .await
            .unwrap();

        assert_eq!(product.category_id, category.id);
        assert_eq!(product.display_price(), "$19.99");
        assert_eq!(service.list_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_category_must_exist() {
        let service = manager();

        let err = service
            .create_product(new_product(Some(Uuid::new_v4())))
            .await
            .unwrap_err();

        assert!(err
            .field_errors()
            .is_some_and(|e| e.contains("category", "must exist")));
    }

    #[tokio::test]
    async fn test_blank_product_reports_all_fields() {
        let service = manager();

        let err = service
            .create_product(NewProduct::default())
            .await
            .unwrap_err();

        let errors = err.field_errors().cloned().unwrap_or_default();
        assert!(errors.contains("name", "can't be blank"));
        assert!(errors.contains("price_cents", "is not a number"));
        assert!(errors.contains("quantity", "can't be blank"));
        assert!(errors.contains("category", "can't be blank"));
    }

    #[tokio::test]
    async fn test_blank_category_name_rejected() {
        let service = manager();

        let err = service
            .create_category(NewCategory {
                name: Some("   ".to_string()),
            })
            .await
            .unwrap_err();

        assert!(err
            .field_errors()
            .is_some_and(|e| e.contains("name", "can't be blank")));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let service = manager();
        let category = category(&service).await;
        let product = service
            .create_product(new_product(Some(category.id)))
            .await
            .unwrap();

        service.delete_product(product.id).await.unwrap();

        assert!(matches!(
            service.delete_product(product.id).await,
            Err(AppError::NotFound)
        ));
        assert_eq!(
            service.counts().await.unwrap(),
            CatalogCounts {
                categories: 1,
                products: 0
            }
        );
    }

    #[tokio::test]
    async fn test_category_lookup_skipped_without_id() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo.expect_find_category().never();
        mock_repo.expect_create_product().never();

        let service = CatalogManager::new(Arc::new(mock_repo));
        let result = service.create_product(new_product(None)).await;

        assert!(matches!(result, Err(AppError::Invalid(_))));
    }
}
