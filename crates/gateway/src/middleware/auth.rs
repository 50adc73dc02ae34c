//! Authentication middleware.
//!
//! Both middlewares run before the handler: a rejected request never reaches
//! the service layer.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use common::{AppError, AppResult};
use domain::{UserRole, BEARER_TOKEN_PREFIX};

use crate::state::AppState;

/// Current authenticated user extracted from the bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: Option<String>,
    pub role: UserRole,
}

impl CurrentUser {
    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Check if user has admin privileges.
pub fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Requires any authenticated caller.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let current_user = authenticate(&state, &request)?;

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Requires an authenticated caller with the admin role.
pub async fn admin_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let current_user = authenticate(&state, &request)?;

    if let Err(e) = require_admin(&current_user) {
        debug!(user_id = %current_user.user_id, path = %request.uri().path(), "Admin role required");
        return Err(e);
    }

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

fn authenticate(state: &AppState, request: &Request<Body>) -> AppResult<CurrentUser> {
    let token = extract_token(request)?;

    let claims = state.token_verifier.verify_token(token)?;

    Ok(CurrentUser {
        user_id: claims.sub,
        email: claims.email,
        role: UserRole::from(claims.role),
    })
}

/// Extract bearer token from Authorization header.
fn extract_token(request: &Request<Body>) -> AppResult<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)
}
