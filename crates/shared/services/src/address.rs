//! Address book operations.
//!
//! Addresses are addressed by their zero-based position in the user's list.

use async_trait::async_trait;

use common::AppResult;
use domain::{AddressCreate, AddressResponse, AddressUpdate};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Address service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddressService: Send + Sync {
    async fn get_addresses(&self, user_id: String) -> AppResult<Vec<AddressResponse>>;

    async fn add_address(
        &self,
        user_id: String,
        address: AddressCreate,
    ) -> AppResult<AddressResponse>;

    async fn update_address(
        &self,
        user_id: String,
        index: usize,
        update: AddressUpdate,
    ) -> AppResult<AddressResponse>;

    async fn delete_address(&self, user_id: String, index: usize) -> AppResult<()>;

    /// Mark one address as default; returns the whole updated list
    async fn set_default_address(
        &self,
        user_id: String,
        index: usize,
    ) -> AppResult<Vec<AddressResponse>>;
}
