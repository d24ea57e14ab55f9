use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its assigned id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products, highest id first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Replace every field; `NotFound` when the id does not exist
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Store a new availability flag; `NotFound` when the id does not exist
    async fn set_availability(&self, id: i32, availability: bool) -> ProductResult<Product>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: HashMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.last_id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id space exhausted".to_string()))?;
        let product = Product::new(store.last_id, input);
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        let mut products: Vec<Product> = store.products.values().cloned().collect();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(products)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        product.apply_update(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn set_availability(&self, id: i32, availability: bool) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        product.availability = availability;
        product.updated_at = chrono::Utc::now();

        tracing::info!(product_id = id, availability, "Updated product availability");
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
