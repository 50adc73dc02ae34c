//! Cart handlers for the authenticated caller.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};

use common::AppResult;
use domain::{CartItemAdd, CartItemUpdate, CartResponse};

use crate::extractors::{PathParams, ValidatedJson};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Create cart routes (mounted under `/users/me`)
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cart",
            get(get_cart)
                .post(add_to_cart)
                .put(update_cart_item)
                .delete(clear_cart),
        )
        .route("/cart/:product_id", delete(remove_from_cart))
}

/// Get the caller's cart
#[utoipa::path(
    get,
    path = "/users/me/cart",
    tag = "Users-cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current cart", body = CartResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_cart(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<CartResponse>> {
    let cart = state.services.carts().get_cart(current_user.user_id).await?;
    Ok(Json(cart))
}

/// Add an item to the cart
#[utoipa::path(
    post,
    path = "/users/me/cart",
    tag = "Users-cart",
    security(("bearer_auth" = [])),
    request_body = CartItemAdd,
    responses(
        (status = 201, description = "Item added", body = CartResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn add_to_cart(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(item): ValidatedJson<CartItemAdd>,
) -> AppResult<(StatusCode, Json<CartResponse>)> {
    let cart = state
        .services
        .carts()
        .add_to_cart(current_user.user_id, item)
        .await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// Change the quantity of an item
#[utoipa::path(
    put,
    path = "/users/me/cart",
    tag = "Users-cart",
    security(("bearer_auth" = [])),
    request_body = CartItemUpdate,
    responses(
        (status = 200, description = "Cart updated", body = CartResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_cart_item(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(update): ValidatedJson<CartItemUpdate>,
) -> AppResult<Json<CartResponse>> {
    let cart = state
        .services
        .carts()
        .update_cart_item(current_user.user_id, update)
        .await?;
    Ok(Json(cart))
}

/// Remove one product from the cart
#[utoipa::path(
    delete,
    path = "/users/me/cart/{product_id}",
    tag = "Users-cart",
    security(("bearer_auth" = [])),
    params(("product_id" = String, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Item removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Item not in cart")
    )
)]
pub async fn remove_from_cart(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    PathParams(product_id): PathParams<String>,
) -> AppResult<StatusCode> {
    state
        .services
        .carts()
        .remove_from_cart(current_user.user_id, product_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Empty the cart
#[utoipa::path(
    delete,
    path = "/users/me/cart",
    tag = "Users-cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Cart cleared"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn clear_cart(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    state.services.carts().clear_cart(current_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
