//! Coupon handlers.
//!
//! Management is admin-only, validation needs a signed-in customer, and the
//! list of active coupons is public.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch, post},
    Router,
};

use common::AppResult;
use domain::{
    CouponCreate, CouponListItem, CouponResponse, CouponUpdate, CouponValidate,
    CouponValidateResponse,
};

use crate::extractors::{PathParams, ValidatedJson};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Public coupon routes
pub fn coupon_public_routes() -> Router<AppState> {
    Router::new().route("/active", get(list_active_coupons))
}

/// Coupon routes for any authenticated caller
pub fn coupon_user_routes() -> Router<AppState> {
    Router::new().route("/validate", post(validate_coupon))
}

/// Admin-only coupon routes
pub fn coupon_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_coupons).post(create_coupon))
        .route(
            "/:coupon_id",
            get(get_coupon).put(update_coupon).delete(delete_coupon),
        )
        .route("/:coupon_id/toggle-active", patch(toggle_coupon_active))
}

/// Create a coupon (admin only)
#[utoipa::path(
    post,
    path = "/coupons",
    tag = "Coupons",
    security(("bearer_auth" = [])),
    request_body = CouponCreate,
    responses(
        (status = 200, description = "Coupon created", body = CouponResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 409, description = "Coupon code already exists")
    )
)]
pub async fn create_coupon(
    Extension(admin): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(coupon): ValidatedJson<CouponCreate>,
) -> AppResult<Json<CouponResponse>> {
    let coupon = state
        .services
        .coupons()
        .create_coupon(coupon, admin.user_id)
        .await?;
    Ok(Json(coupon))
}

/// List all coupons (admin only)
#[utoipa::path(
    get,
    path = "/coupons",
    tag = "Coupons",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All coupons", body = Vec<CouponListItem>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_coupons(State(state): State<AppState>) -> AppResult<Json<Vec<CouponListItem>>> {
    let coupons = state.services.coupons().list_coupons().await?;
    Ok(Json(coupons))
}

/// Get coupon by ID (admin only)
#[utoipa::path(
    get,
    path = "/coupons/{coupon_id}",
    tag = "Coupons",
    security(("bearer_auth" = [])),
    params(("coupon_id" = String, Path, description = "Coupon ID")),
    responses(
        (status = 200, description = "Coupon", body = CouponResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Coupon not found")
    )
)]
pub async fn get_coupon(
    State(state): State<AppState>,
    PathParams(coupon_id): PathParams<String>,
) -> AppResult<Json<CouponResponse>> {
    let coupon = state.services.coupons().get_coupon(coupon_id).await?;
    Ok(Json(coupon))
}

/// Update a coupon (admin only)
#[utoipa::path(
    put,
    path = "/coupons/{coupon_id}",
    tag = "Coupons",
    security(("bearer_auth" = [])),
    params(("coupon_id" = String, Path, description = "Coupon ID")),
    request_body = CouponUpdate,
    responses(
        (status = 200, description = "Coupon updated", body = CouponResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Coupon not found")
    )
)]
pub async fn update_coupon(
    State(state): State<AppState>,
    PathParams(coupon_id): PathParams<String>,
    ValidatedJson(update): ValidatedJson<CouponUpdate>,
) -> AppResult<Json<CouponResponse>> {
    let coupon = state
        .services
        .coupons()
        .update_coupon(coupon_id, update)
        .await?;
    Ok(Json(coupon))
}

/// Delete a coupon (admin only)
#[utoipa::path(
    delete,
    path = "/coupons/{coupon_id}",
    tag = "Coupons",
    security(("bearer_auth" = [])),
    params(("coupon_id" = String, Path, description = "Coupon ID")),
    responses(
        (status = 204, description = "Coupon deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Coupon not found")
    )
)]
pub async fn delete_coupon(
    State(state): State<AppState>,
    PathParams(coupon_id): PathParams<String>,
) -> AppResult<StatusCode> {
    state.services.coupons().delete_coupon(coupon_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip a coupon's active flag (admin only)
#[utoipa::path(
    patch,
    path = "/coupons/{coupon_id}/toggle-active",
    tag = "Coupons",
    security(("bearer_auth" = [])),
    params(("coupon_id" = String, Path, description = "Coupon ID")),
    responses(
        (status = 200, description = "Coupon toggled", body = CouponResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Coupon not found")
    )
)]
pub async fn toggle_coupon_active(
    State(state): State<AppState>,
    PathParams(coupon_id): PathParams<String>,
) -> AppResult<Json<CouponResponse>> {
    let coupon = state.services.coupons().toggle_active(coupon_id).await?;
    Ok(Json(coupon))
}

/// Check a coupon code against a cart total
#[utoipa::path(
    post,
    path = "/coupons/validate",
    tag = "Coupons",
    security(("bearer_auth" = [])),
    request_body = CouponValidate,
    responses(
        (status = 200, description = "Validation outcome", body = CouponValidateResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn validate_coupon(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CouponValidate>,
) -> AppResult<Json<CouponValidateResponse>> {
    let outcome = state
        .services
        .coupons()
        .validate_coupon(request.coupon_code, request.cart_total, current_user.user_id)
        .await?;
    Ok(Json(outcome))
}

/// List coupons currently open to customers
#[utoipa::path(
    get,
    path = "/coupons/active",
    tag = "Coupons",
    responses(
        (status = 200, description = "Active coupons", body = Vec<CouponListItem>)
    )
)]
pub async fn list_active_coupons(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CouponListItem>>> {
    let coupons = state.services.coupons().list_active_coupons().await?;
    Ok(Json(coupons))
}
