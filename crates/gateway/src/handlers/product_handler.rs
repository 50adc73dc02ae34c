//! Product handlers.
//!
//! Browsing is public; catalog management requires the admin role, enforced
//! by the middleware layered in `routes`.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post, put},
    Router,
};

use common::AppResult;
use domain::{
    ChangeAvailabilityProduct, CreateProduct, ProductDetailUpdate, ProductFilter,
    ProductPriceUpdate, ProductResponse, ProductStockUpdate,
};

use crate::extractors::{PathParams, QueryParams, ValidatedJson};
use crate::state::AppState;

/// Public product routes
pub fn product_public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/:product_id", get(get_product))
}

/// Admin-only product routes
pub fn product_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/:product_id", delete(delete_product))
        .route("/:product_id/details", put(update_product_details))
        .route("/:product_id/price", put(update_product_price))
        .route("/:product_id/stock", put(update_product_stock))
        .route("/:product_id/availability", patch(change_availability))
}

/// List products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductResponse>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<ProductFilter>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.services.products().list_products(filter).await?;
    Ok(Json(products))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{product_id}",
    tag = "Products",
    params(("product_id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    PathParams(product_id): PathParams<String>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.services.products().get_product(product_id).await?;
    Ok(Json(product))
}

/// Create a product (admin only)
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(product): ValidatedJson<CreateProduct>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.services.products().create_product(product).await?;
    Ok(Json(product))
}

/// Update descriptive fields (admin only)
#[utoipa::path(
    put,
    path = "/products/{product_id}/details",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("product_id" = String, Path, description = "Product ID")),
    request_body = ProductDetailUpdate,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product_details(
    State(state): State<AppState>,
    PathParams(product_id): PathParams<String>,
    ValidatedJson(update): ValidatedJson<ProductDetailUpdate>,
) -> AppResult<Json<ProductResponse>> {
    let product = state
        .services
        .products()
        .update_product_details(product_id, update)
        .await?;
    Ok(Json(product))
}

/// Update price (admin only)
#[utoipa::path(
    put,
    path = "/products/{product_id}/price",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("product_id" = String, Path, description = "Product ID")),
    request_body = ProductPriceUpdate,
    responses(
        (status = 200, description = "Price updated", body = ProductResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product_price(
    State(state): State<AppState>,
    PathParams(product_id): PathParams<String>,
    ValidatedJson(update): ValidatedJson<ProductPriceUpdate>,
) -> AppResult<Json<ProductResponse>> {
    let product = state
        .services
        .products()
        .update_product_price(product_id, update)
        .await?;
    Ok(Json(product))
}

/// Update stock level (admin only)
#[utoipa::path(
    put,
    path = "/products/{product_id}/stock",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("product_id" = String, Path, description = "Product ID")),
    request_body = ProductStockUpdate,
    responses(
        (status = 200, description = "Stock updated", body = ProductResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product_stock(
    State(state): State<AppState>,
    PathParams(product_id): PathParams<String>,
    ValidatedJson(update): ValidatedJson<ProductStockUpdate>,
) -> AppResult<Json<ProductResponse>> {
    let product = state
        .services
        .products()
        .update_product_stock(product_id, update)
        .await?;
    Ok(Json(product))
}

/// Toggle availability (admin only)
#[utoipa::path(
    patch,
    path = "/products/{product_id}/availability",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("product_id" = String, Path, description = "Product ID")),
    request_body = ChangeAvailabilityProduct,
    responses(
        (status = 200, description = "Availability changed", body = ProductResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn change_availability(
    State(state): State<AppState>,
    PathParams(product_id): PathParams<String>,
    ValidatedJson(availability): ValidatedJson<ChangeAvailabilityProduct>,
) -> AppResult<Json<ProductResponse>> {
    let product = state
        .services
        .products()
        .change_availability(product_id, availability.is_available)
        .await?;
    Ok(Json(product))
}

/// Delete a product (admin only)
#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("product_id" = String, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    PathParams(product_id): PathParams<String>,
) -> AppResult<StatusCode> {
    state.services.products().delete_product(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
