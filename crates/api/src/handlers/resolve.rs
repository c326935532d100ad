use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    routing::post,
    Json, Router,
};
use dnsview_domain::ResolutionOutcome;
use tracing::{debug, instrument, warn};

use super::{method_not_allowed, preflight};
use crate::{dto::ResolveRequest, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/resolve",
        post(resolve_domain)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}

/// Always answers 200 once the request is well formed; callers read the
/// `status` field to learn whether the script succeeded.
#[instrument(skip_all, name = "api_resolve_domain")]
pub async fn resolve_domain(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ResolutionOutcome>, ApiError> {
    let body = body.map_err(|e| {
        warn!(error = %e, "Failed to read request body");
        ApiError::UnreadableBody
    })?;

    let request: ResolveRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejected resolve request");
        ApiError::InvalidDomainRequest
    })?;

    let outcome = state.resolve_domain.execute(&request.domain).await?;
    debug!(success = outcome.is_success(), "Resolve request answered");

    Ok(Json(outcome))
}
