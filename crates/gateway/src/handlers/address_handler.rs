//! Address book handlers for the authenticated caller.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};

use common::AppResult;
use domain::{AddressCreate, AddressResponse, AddressUpdate};

use crate::extractors::{PathParams, ValidatedJson};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Create address routes (mounted under `/users/me`)
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/addresses", get(get_addresses).post(add_address))
        .route("/addresses/:index", put(update_address).delete(delete_address))
        .route("/addresses/:index/set-default", put(set_default_address))
}

/// List the caller's addresses
#[utoipa::path(
    get,
    path = "/users/me/addresses",
    tag = "Users-address",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Saved addresses", body = Vec<AddressResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_addresses(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AddressResponse>>> {
    let addresses = state
        .services
        .addresses()
        .get_addresses(current_user.user_id)
        .await?;
    Ok(Json(addresses))
}

/// Add an address
#[utoipa::path(
    post,
    path = "/users/me/addresses",
    tag = "Users-address",
    security(("bearer_auth" = [])),
    request_body = AddressCreate,
    responses(
        (status = 200, description = "Address added", body = AddressResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn add_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(address): ValidatedJson<AddressCreate>,
) -> AppResult<Json<AddressResponse>> {
    let address = state
        .services
        .addresses()
        .add_address(current_user.user_id, address)
        .await?;
    Ok(Json(address))
}

/// Update the address at `index`
#[utoipa::path(
    put,
    path = "/users/me/addresses/{index}",
    tag = "Users-address",
    security(("bearer_auth" = [])),
    params(("index" = usize, Path, description = "Zero-based position in the address list")),
    request_body = AddressUpdate,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No address at this index")
    )
)]
pub async fn update_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    PathParams(index): PathParams<usize>,
    ValidatedJson(update): ValidatedJson<AddressUpdate>,
) -> AppResult<Json<AddressResponse>> {
    let address = state
        .services
        .addresses()
        .update_address(current_user.user_id, index, update)
        .await?;
    Ok(Json(address))
}

/// Delete the address at `index`
#[utoipa::path(
    delete,
    path = "/users/me/addresses/{index}",
    tag = "Users-address",
    security(("bearer_auth" = [])),
    params(("index" = usize, Path, description = "Zero-based position in the address list")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No address at this index")
    )
)]
pub async fn delete_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    PathParams(index): PathParams<usize>,
) -> AppResult<StatusCode> {
    state
        .services
        .addresses()
        .delete_address(current_user.user_id, index)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Make the address at `index` the default
#[utoipa::path(
    put,
    path = "/users/me/addresses/{index}/set-default",
    tag = "Users-address",
    security(("bearer_auth" = [])),
    params(("index" = usize, Path, description = "Zero-based position in the address list")),
    responses(
        (status = 200, description = "Updated address list", body = Vec<AddressResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No address at this index")
    )
)]
pub async fn set_default_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    PathParams(index): PathParams<usize>,
) -> AppResult<Json<Vec<AddressResponse>>> {
    let addresses = state
        .services
        .addresses()
        .set_default_address(current_user.user_id, index)
        .await?;
    Ok(Json(addresses))
}
