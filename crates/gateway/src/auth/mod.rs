//! Bearer token verification.
//!
//! Tokens are issued elsewhere; the gateway only checks them and turns the
//! claims into a [`crate::middleware::CurrentUser`].

mod jwt;

pub use jwt::{Claims, JwtVerifier};

use common::AppResult;

/// Verifies a bearer token and yields its claims.
pub trait TokenVerifier: Send + Sync {
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}
