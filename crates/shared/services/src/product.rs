//! Product catalog operations.

use async_trait::async_trait;

use common::AppResult;
use domain::{
    CreateProduct, ProductDetailUpdate, ProductFilter, ProductPriceUpdate, ProductResponse,
    ProductStockUpdate,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List products matching the filter, paginated by `skip`/`limit`
    async fn list_products(&self, filter: ProductFilter) -> AppResult<Vec<ProductResponse>>;

    /// Get a single product
    async fn get_product(&self, product_id: String) -> AppResult<ProductResponse>;

    async fn create_product(&self, product: CreateProduct) -> AppResult<ProductResponse>;

    async fn update_product_details(
        &self,
        product_id: String,
        update: ProductDetailUpdate,
    ) -> AppResult<ProductResponse>;

    async fn update_product_price(
        &self,
        product_id: String,
        update: ProductPriceUpdate,
    ) -> AppResult<ProductResponse>;

    async fn update_product_stock(
        &self,
        product_id: String,
        update: ProductStockUpdate,
    ) -> AppResult<ProductResponse>;

    /// Set whether the product is listed
    async fn change_availability(
        &self,
        product_id: String,
        is_available: bool,
    ) -> AppResult<ProductResponse>;

    async fn delete_product(&self, product_id: String) -> AppResult<()>;
}
