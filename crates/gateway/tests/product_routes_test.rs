mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;

use ::common::AppError;
use support::*;

#[tokio::test]
async fn product_list_is_public_and_applies_defaults() {
    let mut services = TestServices::new();
    services
        .products
        .expect_list_products()
        .withf(|filter| {
            filter.category.is_none() && filter.is_available && filter.skip == 0 && filter.limit == 50
        })
        .times(1)
        .returning(|_| Ok(vec![product("p-1"), product("p-2")]));

    let (status, body) = send(services.into_app(), request(Method::GET, "/products", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["id"], "p-1");
}

#[tokio::test]
async fn product_list_forwards_query_filters() {
    let mut services = TestServices::new();
    services
        .products
        .expect_list_products()
        .withf(|filter| {
            filter.category.as_deref() == Some("coffee")
                && filter.search.as_deref() == Some("beans")
                && filter.min_price == Some(5.0)
                && filter.max_price == Some(30.0)
                && !filter.is_available
                && filter.skip == 10
                && filter.limit == 5
        })
        .times(1)
        .returning(|_| Ok(vec![]));

    let uri = "/products?category=coffee&search=beans&min_price=5&max_price=30&is_available=false&skip=10&limit=5";
    let (status, body) = send(services.into_app(), request(Method::GET, uri, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn malformed_product_query_is_a_validation_error() {
    let (status, body) = send(
        untouched_app(),
        request(Method::GET, "/products?limit=-5", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn product_detail_returns_service_value() {
    let mut services = TestServices::new();
    services
        .products
        .expect_get_product()
        .withf(|id| id == "p-7")
        .times(1)
        .returning(|id| Ok(product(&id)));

    let (status, body) = send(
        services.into_app(),
        request(Method::GET, "/products/p-7", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "p-7");
    assert_eq!(body["price"], 24.5);
}

#[tokio::test]
async fn service_errors_propagate_unchanged() {
    let mut services = TestServices::new();
    services
        .products
        .expect_get_product()
        .times(1)
        .returning(|_| Err(AppError::NotFound));

    let (status, body) = send(
        services.into_app(),
        request(Method::GET, "/products/missing", None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn admin_creates_product() {
    let mut services = TestServices::new();
    services
        .products
        .expect_create_product()
        .withf(|p| p.name == "Espresso Beans 1kg" && p.stock == 12 && p.is_available)
        .times(1)
        .returning(|_| Ok(product("p-new")));

    let (status, body) = send(
        services.into_app(),
        json_request(
            Method::POST,
            "/products",
            Some(&admin_token()),
            json!({
                "name": "Espresso Beans 1kg",
                "category": "coffee",
                "price": 24.5,
                "stock": 12
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "p-new");
}

#[tokio::test]
async fn invalid_product_body_never_reaches_the_service() {
    let (status, body) = send(
        untouched_app(),
        json_request(
            Method::POST,
            "/products",
            Some(&admin_token()),
            json!({"name": "", "category": "coffee", "price": -1.0, "stock": 1}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("Product name is required"));
    assert!(message.contains("Price cannot be negative"));
}

#[tokio::test]
async fn admin_updates_details_price_and_stock() {
    let mut services = TestServices::new();
    services
        .products
        .expect_update_product_details()
        .withf(|id, update| id == "p-1" && update.name.as_deref() == Some("Decaf"))
        .times(1)
        .returning(|id, _| Ok(product(&id)));
    services
        .products
        .expect_update_product_price()
        .withf(|id, update| id == "p-1" && update.price == 19.99)
        .times(1)
        .returning(|id, _| Ok(product(&id)));
    services
        .products
        .expect_update_product_stock()
        .withf(|id, update| id == "p-1" && update.stock == 0)
        .times(1)
        .returning(|id, _| Ok(product(&id)));

    let app = services.into_app();
    let token = admin_token();

    let (status, _) = send(
        app.clone(),
        json_request(Method::PUT, "/products/p-1/details", Some(&token), json!({"name": "Decaf"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        app.clone(),
        json_request(Method::PUT, "/products/p-1/price", Some(&token), json!({"price": 19.99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        app,
        json_request(Method::PUT, "/products/p-1/stock", Some(&token), json!({"stock": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn admin_changes_availability() {
    let mut services = TestServices::new();
    services
        .products
        .expect_change_availability()
        .withf(|id, available| id == "p-1" && !*available)
        .times(1)
        .returning(|id, _| {
            let mut p = product(&id);
            p.is_available = false;
            Ok(p)
        });

    let (status, body) = send(
        services.into_app(),
        json_request(
            Method::PATCH,
            "/products/p-1/availability",
            Some(&admin_token()),
            json!({"is_available": false}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_available"], false);
}

#[tokio::test]
async fn admin_deletes_product_with_no_content() {
    let mut services = TestServices::new();
    services
        .products
        .expect_delete_product()
        .withf(|id| id == "p-1")
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = send(
        services.into_app(),
        request(Method::DELETE, "/products/p-1", Some(&admin_token())),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}
