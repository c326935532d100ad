use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dnsview_domain::DomainError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    UnreadableBody,
    InvalidDomainRequest,
    Domain(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidDomainName(_) => Self::InvalidDomainRequest,
            other => Self::Domain(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnreadableBody | ApiError::InvalidDomainRequest => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::InvalidDomainName(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::MethodNotAllowed => "Method not allowed".to_string(),
            ApiError::UnreadableBody => "Invalid request body".to_string(),
            ApiError::InvalidDomainRequest
            | ApiError::Domain(DomainError::InvalidDomainName(_)) => {
                "Invalid JSON or missing domain".to_string()
            }
            ApiError::Domain(DomainError::RecordsUnavailable { file, .. }) => {
                format!("Failed to read {}", file)
            }
            ApiError::Domain(DomainError::InvalidRecordsFormat(_)) => {
                "Invalid JSON format".to_string()
            }
            ApiError::Domain(_) => "internal error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
