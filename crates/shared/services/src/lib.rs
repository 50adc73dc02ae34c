//! Storefront service layer contract.
//!
//! The gateway never implements business rules itself. Each resource has an
//! async trait here; the hosting application supplies implementations through
//! a [`ServiceProvider`] once the database connection is up.

mod address;
mod cart;
pub mod container;
mod coupon;
mod product;

pub use address::AddressService;
pub use cart::CartService;
pub use container::{ServiceContainer, ServiceProvider, Services};
pub use coupon::CouponService;
pub use product::ProductService;

#[cfg(any(test, feature = "test-utils"))]
pub use address::MockAddressService;
#[cfg(any(test, feature = "test-utils"))]
pub use cart::MockCartService;
#[cfg(any(test, feature = "test-utils"))]
pub use coupon::MockCouponService;
#[cfg(any(test, feature = "test-utils"))]
pub use product::MockProductService;
