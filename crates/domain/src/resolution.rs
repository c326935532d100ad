use serde::Serialize;

pub const RESOLUTION_FAILED_MESSAGE: &str = "Failed to resolve domain";

/// Business-level result of a resolver script run.
///
/// Both variants travel with HTTP 200; clients branch on `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResolutionOutcome {
    Success,
    Failure {
        message: &'static str,
    },
}

impl ResolutionOutcome {
    pub fn failure() -> Self {
        ResolutionOutcome::Failure {
            message: RESOLUTION_FAILED_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResolutionOutcome::Success)
    }
}
