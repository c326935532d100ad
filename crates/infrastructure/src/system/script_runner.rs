use async_trait::async_trait;
use dnsview_application::ports::{ResolverScript, ScriptRun};
use dnsview_domain::{DomainError, DomainName};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs `<interpreter> <script> <domain>` inside the shared directory.
pub struct ExternalScriptRunner {
    interpreter: String,
    script: String,
    working_dir: PathBuf,
    timeout: Option<Duration>,
}

impl ExternalScriptRunner {
    pub fn new(
        interpreter: impl Into<String>,
        script: impl Into<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            working_dir: working_dir.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn launch_error(&self, e: std::io::Error) -> DomainError {
        DomainError::ScriptLaunch(format!("{}: {}", self.interpreter, e))
    }

    fn command(&self, domain: &DomainName) -> Command {
        let mut command = Command::new(&self.interpreter);
        command
            .arg(&self.script)
            .arg(domain.as_str())
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

#[async_trait]
impl ResolverScript for ExternalScriptRunner {
    async fn run(&self, domain: &DomainName) -> Result<ScriptRun, DomainError> {
        debug!(
            interpreter = %self.interpreter,
            script = %self.script,
            working_dir = %self.working_dir.display(),
            domain = %domain,
            "Spawning resolver script"
        );

        let mut child = self
            .command(domain)
            .spawn()
            .map_err(|e| self.launch_error(e))?;

        // Pipes are drained while we wait, otherwise a full pipe stalls the script.
        let stdout = tokio::spawn(read_pipe(child.stdout.take()));
        let stderr = tokio::spawn(read_pipe(child.stderr.take()));

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    if let Err(e) = child.kill().await {
                        warn!(
                            domain = %domain,
                            error = %e,
                            "Failed to kill timed out resolver script"
                        );
                    }
                    return Err(DomainError::script_timeout(limit));
                }
            },
            None => child.wait().await,
        }
        .map_err(|e| self.launch_error(e))?;

        let mut combined =
            String::from_utf8_lossy(&stdout.await.unwrap_or_default()).into_owned();
        combined.push_str(&String::from_utf8_lossy(&stderr.await.unwrap_or_default()));

        if status.success() {
            Ok(ScriptRun::succeeded(combined))
        } else {
            Ok(ScriptRun::failed(status.code(), combined))
        }
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        // A read error only truncates the logged output.
        let _ = pipe.read_to_end(&mut buf).await;
    }
    buf
}
