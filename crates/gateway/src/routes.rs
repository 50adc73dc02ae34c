//! Route configuration.

use axum::{http::HeaderValue, middleware, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    address_routes, cart_routes, coupon_admin_routes, coupon_public_routes, coupon_user_routes,
    health_routes, product_admin_routes, product_public_routes,
};
use crate::middleware::{admin_middleware, auth_middleware};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Products: browsing is public, management is admin-only
        .nest(
            "/products",
            product_public_routes().merge(
                product_admin_routes()
                    .route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware)),
            ),
        )
        // Address book and cart of the caller (auth required)
        .nest(
            "/users/me",
            address_routes()
                .merge(cart_routes())
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Coupons: active list is public, validation needs a user, the rest is admin-only
        .nest(
            "/coupons",
            coupon_public_routes()
                .merge(
                    coupon_user_routes()
                        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
                )
                .merge(
                    coupon_admin_routes()
                        .route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware)),
                ),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer. An empty origin list allows any origin.
fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

