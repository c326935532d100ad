use axum::{extract::State, routing::get, Json, Router};
use dnsview_domain::ResolutionTable;
use tracing::{debug, instrument};

use super::{method_not_allowed, preflight};
use crate::{errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/dns-records",
        get(get_dns_records)
            .head(method_not_allowed)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}

#[instrument(skip(state), name = "api_get_dns_records")]
pub async fn get_dns_records(
    State(state): State<AppState>,
) -> Result<Json<ResolutionTable>, ApiError> {
    let table = state.get_records.execute().await?;

    debug!(name_servers = table.len(), "Serving resolution table");

    Ok(Json(table))
}
