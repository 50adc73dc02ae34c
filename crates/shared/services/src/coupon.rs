//! Coupon management and validation.

use async_trait::async_trait;

use common::AppResult;
use domain::{CouponCreate, CouponListItem, CouponResponse, CouponUpdate, CouponValidateResponse};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Coupon service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CouponService: Send + Sync {
    /// Create a coupon on behalf of an admin
    async fn create_coupon(
        &self,
        coupon: CouponCreate,
        created_by: String,
    ) -> AppResult<CouponResponse>;

    async fn list_coupons(&self) -> AppResult<Vec<CouponListItem>>;

    async fn get_coupon(&self, coupon_id: String) -> AppResult<CouponResponse>;

    async fn update_coupon(
        &self,
        coupon_id: String,
        update: CouponUpdate,
    ) -> AppResult<CouponResponse>;

    async fn delete_coupon(&self, coupon_id: String) -> AppResult<()>;

    /// Flip the coupon's active flag
    async fn toggle_active(&self, coupon_id: String) -> AppResult<CouponResponse>;

    /// Check a code against a cart total for the given user.
    ///
    /// The discount computation belongs to the implementation.
    async fn validate_coupon(
        &self,
        coupon_code: String,
        cart_total: f64,
        user_id: String,
    ) -> AppResult<CouponValidateResponse>;

    /// Coupons currently open to customers
    async fn list_active_coupons(&self) -> AppResult<Vec<CouponListItem>>;
}
