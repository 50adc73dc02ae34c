//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::health_handler::HealthResponse;
use domain::{
    AddressCreate, AddressResponse, AddressUpdate, CartItemAdd, CartItemResponse, CartItemUpdate,
    CartResponse, ChangeAvailabilityProduct, CouponCreate, CouponListItem, CouponResponse,
    CouponUpdate, CouponValidate, CouponValidateResponse, CreateProduct, DiscountType,
    ProductDetailUpdate, ProductPriceUpdate, ProductResponse, ProductStockUpdate,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::update_product_details,
        crate::handlers::product_handler::update_product_price,
        crate::handlers::product_handler::update_product_stock,
        crate::handlers::product_handler::change_availability,
        crate::handlers::product_handler::delete_product,
        crate::handlers::address_handler::get_addresses,
        crate::handlers::address_handler::add_address,
        crate::handlers::address_handler::update_address,
        crate::handlers::address_handler::delete_address,
        crate::handlers::address_handler::set_default_address,
        crate::handlers::cart_handler::get_cart,
        crate::handlers::cart_handler::add_to_cart,
        crate::handlers::cart_handler::update_cart_item,
        crate::handlers::cart_handler::remove_from_cart,
        crate::handlers::cart_handler::clear_cart,
        crate::handlers::coupon_handler::create_coupon,
        crate::handlers::coupon_handler::list_coupons,
        crate::handlers::coupon_handler::get_coupon,
        crate::handlers::coupon_handler::update_coupon,
        crate::handlers::coupon_handler::delete_coupon,
        crate::handlers::coupon_handler::toggle_coupon_active,
        crate::handlers::coupon_handler::validate_coupon,
        crate::handlers::coupon_handler::list_active_coupons,
    ),
    components(
        schemas(
            HealthResponse,
            CreateProduct,
            ProductDetailUpdate,
            ProductPriceUpdate,
            ProductStockUpdate,
            ChangeAvailabilityProduct,
            ProductResponse,
            AddressCreate,
            AddressUpdate,
            AddressResponse,
            CartItemAdd,
            CartItemUpdate,
            CartItemResponse,
            CartResponse,
            DiscountType,
            CouponCreate,
            CouponUpdate,
            CouponResponse,
            CouponListItem,
            CouponValidate,
            CouponValidateResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Users-address", description = "Address book of the signed-in user"),
        (name = "Users-cart", description = "Shopping cart of the signed-in user"),
        (name = "Coupons", description = "Coupon management and validation"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route_group() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/health",
            "/products",
            "/products/{product_id}",
            "/products/{product_id}/availability",
            "/users/me/addresses/{index}/set-default",
            "/users/me/cart/{product_id}",
            "/coupons/active",
            "/coupons/validate",
            "/coupons/{coupon_id}/toggle-active",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn schema_examples_are_rendered() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let product = &doc["components"]["schemas"]["CreateProduct"]["properties"];

        assert_eq!(product["name"]["example"], "Espresso Beans 1kg");
        assert_eq!(
            doc["components"]["schemas"]["CouponCreate"]["properties"]["code"]["example"],
            "WELCOME10"
        );
    }

    #[test]
    fn document_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
