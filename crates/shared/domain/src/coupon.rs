//! Coupon schemas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// How a coupon's `discount_value` is interpreted by the service layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Coupon creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CouponCreate {
    #[validate(length(min = 1, max = 64, message = "Coupon code must be 1-64 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "WELCOME10"))]
    pub code: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    #[validate(range(min = 0.0, message = "Discount value cannot be negative"))]
    pub discount_value: f64,
    #[validate(range(min = 0.0, message = "Minimum cart value cannot be negative"))]
    pub min_cart_value: Option<f64>,
    #[validate(range(min = 0.0, message = "Maximum discount cannot be negative"))]
    pub max_discount: Option<f64>,
    pub usage_limit: Option<u32>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial coupon update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CouponUpdate {
    pub description: Option<String>,
    pub discount_type: Option<DiscountType>,
    #[validate(range(min = 0.0, message = "Discount value cannot be negative"))]
    pub discount_value: Option<f64>,
    #[validate(range(min = 0.0, message = "Minimum cart value cannot be negative"))]
    pub min_cart_value: Option<f64>,
    #[validate(range(min = 0.0, message = "Maximum discount cannot be negative"))]
    pub max_discount: Option<f64>,
    pub usage_limit: Option<u32>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
}

/// Full coupon record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CouponResponse {
    pub id: String,
    pub code: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_cart_value: Option<f64>,
    pub max_discount: Option<f64>,
    pub usage_limit: Option<u32>,
    pub used_count: u32,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_active: bool,
    /// Id of the admin who created the coupon
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Condensed coupon used by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CouponListItem {
    pub id: String,
    pub code: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_active: bool,
}

/// Coupon check against a cart total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CouponValidate {
    #[validate(length(min = 1, message = "Coupon code is required"))]
    pub coupon_code: String,
    #[validate(range(min = 0.0, message = "Cart total cannot be negative"))]
    pub cart_total: f64,
}

/// Outcome of a coupon check, computed by the service layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CouponValidateResponse {
    pub is_valid: bool,
    pub coupon_code: String,
    pub discount_amount: f64,
    pub final_total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_true() -> bool {
    true
}
