//! HTTP request handlers.

pub mod address_handler;
pub mod cart_handler;
pub mod coupon_handler;
pub mod health_handler;
pub mod product_handler;

pub use address_handler::address_routes;
pub use cart_handler::cart_routes;
pub use coupon_handler::{coupon_admin_routes, coupon_public_routes, coupon_user_routes};
pub use health_handler::health_routes;
pub use product_handler::{product_admin_routes, product_public_routes};
