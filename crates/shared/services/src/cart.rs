//! Shopping cart operations.

use async_trait::async_trait;

use common::AppResult;
use domain::{CartItemAdd, CartItemUpdate, CartResponse};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Cart service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CartService: Send + Sync {
    async fn get_cart(&self, user_id: String) -> AppResult<CartResponse>;

    async fn add_to_cart(&self, user_id: String, item: CartItemAdd) -> AppResult<CartResponse>;

    async fn update_cart_item(
        &self,
        user_id: String,
        update: CartItemUpdate,
    ) -> AppResult<CartResponse>;

    async fn remove_from_cart(&self, user_id: String, product_id: String) -> AppResult<()>;

    async fn clear_cart(&self, user_id: String) -> AppResult<()>;
}
