pub mod records;
pub mod resolve;

use crate::errors::ApiError;
use axum::http::StatusCode;
use tracing::{debug, instrument};

pub use records::get_dns_records;
pub use resolve::resolve_domain;

#[instrument(skip_all)]
pub async fn health_check() -> &'static str {
    debug!("Health check requested");
    "OK"
}

/// CORS preflight: no body, headers come from the CORS middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
