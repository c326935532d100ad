use axum::http::HeaderValue;
use dnsview_application::use_cases::{GetResolutionTableUseCase, ResolveDomainUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_records: Arc<GetResolutionTableUseCase>,
    pub resolve_domain: Arc<ResolveDomainUseCase>,
    /// Echoed in `Access-Control-Allow-Origin`.
    pub allowed_origin: HeaderValue,
}
