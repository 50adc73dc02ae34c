//! Domain layer - Storefront request and response schemas.
//!
//! These are pass-through shapes: the gateway validates their field-level
//! constraints and hands them to the service layer unchanged.

pub mod address;
pub mod cart;
pub mod constants;
pub mod coupon;
pub mod product;
pub mod user;

pub use address::{AddressCreate, AddressResponse, AddressUpdate};
pub use cart::{CartItemAdd, CartItemResponse, CartItemUpdate, CartResponse};
pub use constants::*;
pub use coupon::{
    CouponCreate, CouponListItem, CouponResponse, CouponUpdate, CouponValidate,
    CouponValidateResponse, DiscountType,
};
pub use product::{
    ChangeAvailabilityProduct, CreateProduct, ProductDetailUpdate, ProductFilter,
    ProductPriceUpdate, ProductResponse, ProductStockUpdate,
};
pub use user::UserRole;
