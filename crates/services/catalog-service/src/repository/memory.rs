//! In-memory catalog store for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::AppResult;
use domain::{Category, Product};

use super::CatalogRepository;

/// Vec-backed [`CatalogRepository`].
#[derive(Default)]
pub struct MemoryCatalogStore {
    categories: RwLock<Vec<Category>>,
    products: RwLock<Vec<Product>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogStore {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_category(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create_category(&self, category: Category) -> AppResult<Category> {
        self.categories.write().await.push(category.clone());
        Ok(category)
    }

    async fn count_categories(&self) -> AppResult<u64> {
        Ok(self.categories.read().await.len() as u64)
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        let mut products = self.products.read().await.clone();
        products.reverse();
        Ok(products)
    }

    async fn create_product(&self, product: Product) -> AppResult<Product> {
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn count_products(&self) -> AppResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }
}
