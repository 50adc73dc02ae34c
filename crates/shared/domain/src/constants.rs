//! Domain-level constants.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Product listing
// =============================================================================

/// Default number of products skipped by the list endpoint
pub const DEFAULT_PRODUCT_SKIP: u64 = 0;

/// Default page size of the product list endpoint
pub const DEFAULT_PRODUCT_LIMIT: u64 = 50;

// =============================================================================
// Authentication
// =============================================================================

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";
