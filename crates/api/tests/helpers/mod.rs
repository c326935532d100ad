#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request, Response},
    Router,
};
use dnsview_api::{create_api_routes, AppState};
use dnsview_application::services::RecordsAccessGuard;
use dnsview_application::use_cases::{GetResolutionTableUseCase, ResolveDomainUseCase};
use dnsview_infrastructure::{
    repositories::JsonFileRecordsRepository, system::ExternalScriptRunner,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const ORIGIN: &str = "http://localhost:5173";
pub const RECORDS_FILE: &str = "dns_output.json";
pub const SCRIPT_FILE: &str = "resolve.sh";

/// Router wired to real adapters over a throwaway shared directory.
pub struct TestApp {
    pub router: Router,
    pub shared_dir: TempDir,
}

impl TestApp {
    /// Default wiring: readers and resolve runs do not wait on each other.
    pub fn new() -> Self {
        Self::with_guard(RecordsAccessGuard::disabled())
    }

    /// Resolve runs take exclusive access to the records file.
    pub fn serialized() -> Self {
        Self::with_guard(RecordsAccessGuard::enabled())
    }

    fn with_guard(guard: RecordsAccessGuard) -> Self {
        let shared_dir = TempDir::new().unwrap();
        let router = build_router(shared_dir.path(), guard);
        Self { router, shared_dir }
    }

    pub fn with_records(self, content: &str) -> Self {
        fs::write(self.shared_dir.path().join(RECORDS_FILE), content).unwrap();
        self
    }

    pub fn with_script(self, body: &str) -> Self {
        fs::write(self.shared_dir.path().join(SCRIPT_FILE), body).unwrap();
        self
    }

    pub fn read_shared(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.shared_dir.path().join(name)).ok()
    }

    pub async fn send(&self, method: Method, uri: &str, body: &str) -> Response<Body> {
        self.send_body(method, uri, Body::from(body.to_string())).await
    }

    pub async fn send_body(&self, method: Method, uri: &str, body: Body) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request(method, uri, body))
            .await
            .unwrap()
    }
}

pub fn request(method: Method, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}

fn build_router(shared_dir: &Path, guard: RecordsAccessGuard) -> Router {
    let repository = Arc::new(JsonFileRecordsRepository::new(shared_dir.join(RECORDS_FILE)));
    let script = Arc::new(ExternalScriptRunner::new("sh", SCRIPT_FILE, shared_dir));

    let state = AppState {
        get_records: Arc::new(GetResolutionTableUseCase::new(repository, guard.clone())),
        resolve_domain: Arc::new(ResolveDomainUseCase::new(script, guard)),
        allowed_origin: HeaderValue::from_static(ORIGIN),
    };

    create_api_routes(state)
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
