use crate::handlers;
use crate::middleware::apply_cors_headers;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::records::routes())
        .merge(handlers::resolve::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            apply_cors_headers,
        ))
        .with_state(state)
}
