use async_trait::async_trait;
use dnsview_domain::{DomainError, DomainName};

/// Completed run of the external resolver script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Stdout followed by stderr. Only ever logged.
    pub output: String,
}

impl ScriptRun {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            output: output.into(),
        }
    }

    pub fn failed(exit_code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code,
            output: output.into(),
        }
    }
}

#[async_trait]
pub trait ResolverScript: Send + Sync {
    /// Run the script for `domain` and wait for it to exit.
    ///
    /// `Err` is reserved for runs that never produced an exit status
    /// (spawn failure, timeout).
    async fn run(&self, domain: &DomainName) -> Result<ScriptRun, DomainError>;
}
