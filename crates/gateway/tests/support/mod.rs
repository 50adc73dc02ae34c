//! Shared helpers for router-level tests.
//!
//! The router is driven through `tower::ServiceExt::oneshot` with mocked
//! services. A mock without expectations panics when called, so a test that
//! leaves a service unconfigured also asserts that the request never reached it.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;

use domain::{
    AddressResponse, CartItemResponse, CartResponse, CouponListItem, CouponResponse, DiscountType,
    ProductResponse,
};
use services::{
    MockAddressService, MockCartService, MockCouponService, MockProductService, Services,
};
use storefront_gateway::auth::{Claims, JwtVerifier};
use storefront_gateway::config::GatewayConfig;
use storefront_gateway::infra::MongoConnection;
use storefront_gateway::routes::create_router;
use storefront_gateway::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret-minimum-32-chars";
pub const USER_ID: &str = "user-42";
pub const ADMIN_ID: &str = "admin-1";

/// One mock per service; configure the ones a test expects to be called.
#[derive(Default)]
pub struct TestServices {
    pub products: MockProductService,
    pub addresses: MockAddressService,
    pub carts: MockCartService,
    pub coupons: MockCouponService,
}

impl TestServices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router backed by these mocks and an unconnected database manager.
    pub fn into_app(self) -> Router {
        let services = Services::new(
            Arc::new(self.products),
            Arc::new(self.addresses),
            Arc::new(self.carts),
            Arc::new(self.coupons),
        );

        let state = AppState::new(
            Arc::new(services),
            Arc::new(JwtVerifier::new(TEST_SECRET.as_bytes())),
            Arc::new(MongoConnection::new()),
            GatewayConfig::default(),
        );

        create_router(state)
    }
}

/// Router whose services must never be reached.
pub fn untouched_app() -> Router {
    TestServices::new().into_app()
}

pub fn token_for(user_id: &str, role: &str) -> String {
    signed_token(user_id, role, Duration::hours(1), TEST_SECRET)
}

pub fn user_token() -> String {
    token_for(USER_ID, "user")
}

pub fn admin_token() -> String {
    token_for(ADMIN_ID, "admin")
}

pub fn signed_token(user_id: &str, role: &str, expires_in: Duration, secret: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        email: Some(format!("{user_id}@example.com")),
        role: role.to_string(),
        exp: (now + expires_in).timestamp(),
        iat: Some(now.timestamp()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Send one request; an empty body comes back as `Value::Null`.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub fn product(id: &str) -> ProductResponse {
    ProductResponse {
        id: id.to_string(),
        name: "Espresso Beans 1kg".to_string(),
        description: Some("Dark roast".to_string()),
        category: "coffee".to_string(),
        price: 24.5,
        stock: 12,
        images: vec!["https://cdn.example.com/beans.jpg".to_string()],
        is_available: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn address(full_name: &str, is_default: bool) -> AddressResponse {
    AddressResponse {
        full_name: full_name.to_string(),
        phone: None,
        line1: "1 Market Street".to_string(),
        line2: None,
        city: "Springfield".to_string(),
        state: None,
        postal_code: "12345".to_string(),
        country: "US".to_string(),
        is_default,
    }
}

pub fn cart(user_id: &str, quantity: u32) -> CartResponse {
    let items = if quantity == 0 {
        Vec::new()
    } else {
        vec![CartItemResponse {
            product_id: "p-1".to_string(),
            name: "Espresso Beans 1kg".to_string(),
            price: 24.5,
            quantity,
            subtotal: 24.5 * f64::from(quantity),
        }]
    };

    CartResponse {
        user_id: user_id.to_string(),
        total_items: quantity,
        total_price: 24.5 * f64::from(quantity),
        items,
    }
}

pub fn coupon(id: &str, created_by: &str) -> CouponResponse {
    CouponResponse {
        id: id.to_string(),
        code: "WELCOME10".to_string(),
        description: None,
        discount_type: DiscountType::Percentage,
        discount_value: 10.0,
        min_cart_value: None,
        max_discount: None,
        usage_limit: None,
        used_count: 0,
        valid_from: None,
        valid_until: None,
        is_active: true,
        created_by: created_by.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn coupon_item(id: &str) -> CouponListItem {
    CouponListItem {
        id: id.to_string(),
        code: "WELCOME10".to_string(),
        description: None,
        discount_type: DiscountType::Percentage,
        discount_value: 10.0,
        valid_until: None,
        is_active: true,
    }
}
