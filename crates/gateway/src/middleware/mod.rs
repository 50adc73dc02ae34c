//! Middleware for authentication and authorization.

mod auth;

pub use auth::{admin_middleware, auth_middleware, require_admin, CurrentUser};
