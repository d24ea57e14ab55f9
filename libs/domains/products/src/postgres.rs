use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> ProductResult<entity::Model> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

/// A row removed between the lookup and the write surfaces as `RecordNotUpdated`.
fn missing_on_update(id: i32) -> impl FnOnce(DbErr) -> ProductError {
    move |err| match err {
        DbErr::RecordNotUpdated => ProductError::NotFound(id),
        other => ProductError::Database(other),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut active_model: entity::ActiveModel = self.find_model(id).await?.into();
        active_model.name = Set(input.name);
        active_model.price = Set(input.price);
        active_model.availability = Set(input.availability);
        active_model.updated_at = Set(Utc::now().into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(missing_on_update(id))?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn set_availability(&self, id: i32, availability: bool) -> ProductResult<Product> {
        let mut active_model: entity::ActiveModel = self.find_model(id).await?.into();
        active_model.availability = Set(availability);
        active_model.updated_at = Set(Utc::now().into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(missing_on_update(id))?;

        tracing::info!(product_id = id, availability, "Updated product availability");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
