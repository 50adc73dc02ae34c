//! Request-scoped access to the database handle.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use mongodb::Database;

use crate::state::AppState;

/// The connected database, or `None` before startup connected / after shutdown.
///
/// Extraction never rejects; callers decide what an absent handle means.
pub struct DatabaseHandle(pub Option<Database>);

#[async_trait]
impl FromRequestParts<AppState> for DatabaseHandle {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(DatabaseHandle(state.database.database()))
    }
}
