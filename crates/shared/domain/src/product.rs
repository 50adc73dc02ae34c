//! Product schemas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_PRODUCT_LIMIT, DEFAULT_PRODUCT_SKIP};

/// Product creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateProduct {
    /// Display name
    #[validate(length(min = 1, message = "Product name is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Espresso Beans 1kg"))]
    pub name: String,
    /// Long description
    pub description: Option<String>,
    /// Catalog category
    #[validate(length(min = 1, message = "Category is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "coffee"))]
    pub category: String,
    /// Unit price
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    /// Units in stock
    pub stock: u32,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the product is listed
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// Partial update of descriptive fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductDetailUpdate {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Price update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductPriceUpdate {
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

/// Stock update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductStockUpdate {
    pub stock: u32,
}

/// Availability toggle request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChangeAvailabilityProduct {
    pub is_available: bool,
}

/// Product as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub images: Vec<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters of the product list endpoint.
///
/// Only available products are listed unless `is_available=false` is passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct ProductFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Free-text search
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default = "default_skip")]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            min_price: None,
            max_price: None,
            is_available: true,
            skip: DEFAULT_PRODUCT_SKIP,
            limit: DEFAULT_PRODUCT_LIMIT,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_skip() -> u64 {
    DEFAULT_PRODUCT_SKIP
}

fn default_limit() -> u64 {
    DEFAULT_PRODUCT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_uses_listing_defaults() {
        let filter: ProductFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, ProductFilter::default());
        assert!(filter.is_available);
        assert_eq!(filter.skip, 0);
        assert_eq!(filter.limit, 50);
    }

    #[test]
    fn create_product_rejects_negative_price() {
        let product = CreateProduct {
            name: "Mug".to_string(),
            description: None,
            category: "kitchen".to_string(),
            price: -1.0,
            stock: 3,
            images: vec![],
            is_available: true,
        };
        assert!(product.validate().is_err());
    }

    #[test]
    fn create_product_defaults_to_available() {
        let product: CreateProduct = serde_json::from_str(
            r#"{"name":"Mug","category":"kitchen","price":9.5,"stock":3}"#,
        )
        .unwrap();
        assert!(product.is_available);
        assert!(product.images.is_empty());
        assert!(product.validate().is_ok());
    }
}
