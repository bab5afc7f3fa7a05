use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a single item in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by storage
    #[schema(example = 1)]
    pub id: i32,
    /// Product name
    #[schema(example = "Macbook Pro")]
    pub name: String,
    /// Product price, strictly greater than 0
    #[schema(example = 2000.0)]
    pub price: f64,
    /// Whether the product is currently available
    #[schema(example = true)]
    pub availability: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Macbook Pro")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    #[schema(example = 2000.0)]
    pub price: f64,
}

/// DTO for replacing an existing product (full overwrite)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Macbook Pro")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    #[schema(example = 2000.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

impl Product {
    /// Create a new product from a CreateProduct DTO.
    ///
    /// `id` is a placeholder until storage assigns the real one; new
    /// products are available by default.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: input.name,
            price: input.price,
            availability: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite name, price and availability from an UpdateProduct DTO.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
        self.availability = update.availability;
        self.updated_at = Utc::now();
    }

    /// Flip the availability flag.
    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn new_product_is_available_by_default() {
        let product = Product::new(CreateProduct {
            name: "Monitor".to_string(),
            price: 250.0,
        });

        assert!(product.availability);
        assert_eq!(product.name, "Monitor");
    }

    #[test]
    fn apply_update_overwrites_all_fields() {
        let mut product = Product::new(CreateProduct {
            name: "Monitor".to_string(),
            price: 250.0,
        });

        product.apply_update(UpdateProduct {
            name: "Curved Monitor".to_string(),
            price: 300.0,
            availability: false,
        });

        assert_eq!(product.name, "Curved Monitor");
        assert_eq!(product.price, 300.0);
        assert!(!product.availability);
    }

    #[test]
    fn toggle_availability_flips_the_flag() {
        let mut product = Product::new(CreateProduct {
            name: "Monitor".to_string(),
            price: 250.0,
        });

        product.toggle_availability();
        assert!(!product.availability);

        product.toggle_availability();
        assert!(product.availability);
    }

    #[test]
    fn create_product_rejects_empty_name_and_non_positive_price() {
        let input = CreateProduct {
            name: String::new(),
            price: 0.0,
        };

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("price"));
    }
}
