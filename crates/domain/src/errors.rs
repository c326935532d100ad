use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Failed to read {file}: {reason}")]
    RecordsUnavailable { file: String, reason: String },

    #[error("Invalid records file format: {0}")]
    InvalidRecordsFormat(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to launch resolver script: {0}")]
    ScriptLaunch(String),

    #[error("Resolver script timed out after {0}ms")]
    ScriptTimeout(u64),
}

impl DomainError {
    /// Timeout error for `limit`, saturating at `u64::MAX` milliseconds.
    pub fn script_timeout(limit: Duration) -> Self {
        Self::ScriptTimeout(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX))
    }
}
