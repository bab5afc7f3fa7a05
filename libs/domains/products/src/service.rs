use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product after validating the input
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// List all products, newest first
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Overwrite an existing product's name, price and availability
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository
            .replace(id, input)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Flip a product's availability flag
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .toggle_availability(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound);
        }

        Ok(())
    }
}
