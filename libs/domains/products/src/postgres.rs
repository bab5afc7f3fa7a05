use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// Sea-ORM backed implementation of ProductRepository
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active: entity::ActiveModel = input.into();
        let model = active.insert(&self.db).await?;

        tracing::info!(product_id = %model.id, "Created product");
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

    async fn replace(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.name = Set(input.name);
        active.price = Set(input.price);
        active.availability = Set(input.availability);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let availability = !model.availability;
        let mut active = model.into_active_model();
        active.availability = Set(availability);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;

        tracing::info!(product_id = %id, availability, "Toggled product availability");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        let deleted = result.rows_affected > 0;

        if deleted {
            tracing::info!(product_id = %id, "Deleted product");
        }

        Ok(deleted)
    }
}
