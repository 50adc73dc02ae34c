//! Custom request extractors.

mod database;
mod params;
mod validated_json;

pub use database::DatabaseHandle;
pub use params::{PathParams, QueryParams};
pub use validated_json::ValidatedJson;
