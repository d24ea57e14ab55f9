//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Inputs are re-validated here so callers that bypass the HTTP layer cannot
/// persist an empty name or a non-positive price.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    /// Flips the stored availability flag.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let product = self.get_product(id).await?;
        self.repository
            .set_availability(id, !product.availability)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn product(id: i32, availability: bool) -> Product {
        let mut product = Product::new(id, CreateProduct::new("Monitor", 300.0));
        product.availability = availability;
        product
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_before_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let service = ProductService::new(repo);
        let result = service.create_product(CreateProduct::new("", -1.0)).await;

        match result {
            Err(ProductError::Validation(errors)) => {
                let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(paths, ["name", "price"]);
                assert_eq!(errors[1].msg, "Precio no válido");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_delegates_to_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Product::new(1, input)));

        let service = ProductService::new(repo);
        let created = service
            .create_product(CreateProduct::new("Monitor", 300.0))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .with(eq(2000))
            .returning(|_| Ok(None));

        let service = ProductService::new(repo);
        assert!(matches!(
            service.get_product(2000).await,
            Err(ProductError::NotFound(2000))
        ));
    }

    #[tokio::test]
    async fn test_toggle_availability_flips_current_value() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .with(eq(4))
            .returning(|id| Ok(Some(product(id, true))));
        repo.expect_set_availability()
            .with(eq(4), eq(false))
            .times(1)
            .returning(|id, availability| Ok(product(id, availability)));

        let service = ProductService::new(repo);
        let toggled = service.toggle_availability(4).await.unwrap();
        assert!(!toggled.availability);
    }

    #[tokio::test]
    async fn test_toggle_availability_missing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_set_availability().never();

        let service = ProductService::new(repo);
        assert!(matches!(
            service.toggle_availability(9).await,
            Err(ProductError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().with(eq(3)).returning(|_| Ok(false));

        let service = ProductService::new(repo);
        assert!(matches!(
            service.delete_product(3).await,
            Err(ProductError::NotFound(3))
        ));
    }

    #[tokio::test]
    async fn test_update_propagates_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .returning(|id, _| Err(ProductError::NotFound(id)));

        let service = ProductService::new(repo);
        let input = UpdateProduct {
            name: "Monitor".to_string(),
            price: 10.0,
            availability: true,
        };
        assert!(matches!(
            service.update_product(2000, input).await,
            Err(ProductError::NotFound(2000))
        ));
    }
}
