use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and assign its id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List all products, ordered by id descending
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Overwrite name, price and availability; `None` when the id is unknown
    async fn replace(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Flip the availability flag; `None` when the id is unknown
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Delete a product by id, reporting whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    rows: BTreeMap<i32, Product>,
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
        store.next_id += 1;

        let mut product = Product::new(input);
        product.id = store.next_id;
        store.rows.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        // BTreeMap iterates in ascending id order; newest first wanted
        Ok(store.rows.values().rev().cloned().collect())
    }

    async fn replace(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.rows.get_mut(&id) else {
            return Ok(None);
        };

        product.apply_update(input);
        let updated = product.clone();

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(updated))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.rows.get_mut(&id) else {
            return Ok(None);
        };

        product.toggle_availability();
        let updated = product.clone();

        tracing::info!(product_id = %id, availability = updated.availability, "Toggled product availability");
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.rows.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(create_input("Keyboard", 45.0)).await.unwrap();
        let second = repo.create(create_input("Mouse", 25.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.availability);
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let repo = InMemoryProductRepository::new();

        repo.create(create_input("Keyboard", 45.0)).await.unwrap();
        repo.create(create_input("Mouse", 25.0)).await.unwrap();
        repo.create(create_input("Headset", 80.0)).await.unwrap();

        let products = repo.list().await.unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_replace_overwrites_all_fields() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(create_input("Keyboard", 45.0)).await.unwrap();

        let updated = repo
            .replace(
                product.id,
                UpdateProduct {
                    name: "Mechanical Keyboard".to_string(),
                    price: 120.0,
                    availability: false,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Mechanical Keyboard");
        assert_eq!(updated.price, 120.0);
        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_returns_none() {
        let repo = InMemoryProductRepository::new();

        let result = repo
            .replace(
                398383,
                UpdateProduct {
                    name: "Anything".to_string(),
                    price: 1.0,
                    availability: true,
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_availability() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(create_input("Keyboard", 45.0)).await.unwrap();

        let toggled = repo
            .toggle_availability(product.id)
            .await
            .unwrap()
            .unwrap();
        assert!(!toggled.availability);

        let restored = repo
            .toggle_availability(product.id)
            .await
            .unwrap()
            .unwrap();
        assert!(restored.availability);
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_none() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(create_input("Keyboard", 45.0)).await.unwrap();

        assert!(repo.delete(product.id).await.unwrap());
        assert!(repo.get_by_id(product.id).await.unwrap().is_none());

        // deleting again reports nothing removed
        assert!(!repo.delete(product.id).await.unwrap());
    }
}
