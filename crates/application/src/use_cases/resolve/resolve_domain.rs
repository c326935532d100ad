use dnsview_domain::{DomainError, DomainName, ResolutionOutcome};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn, Instrument};

use crate::ports::ResolverScript;
use crate::services::RecordsAccessGuard;

pub struct ResolveDomainUseCase {
    script: Arc<dyn ResolverScript>,
    guard: RecordsAccessGuard,
}

impl ResolveDomainUseCase {
    pub fn new(script: Arc<dyn ResolverScript>, guard: RecordsAccessGuard) -> Self {
        Self { script, guard }
    }

    /// Run the resolver script for `domain`.
    ///
    /// Only an empty domain is an error. Script failures of any kind are
    /// reported as `ResolutionOutcome::Failure`; the script output stays in
    /// the logs.
    ///
    /// The run happens on its own task: dropping the returned future (for
    /// instance when the client goes away) does not stop a script that is
    /// halfway through rewriting the records file.
    #[instrument(skip(self), name = "resolve_domain")]
    pub async fn execute(&self, domain: &str) -> Result<ResolutionOutcome, DomainError> {
        let domain = DomainName::parse(domain)?;

        let script = Arc::clone(&self.script);
        let guard = self.guard.clone();
        let task_domain = domain.clone();
        let run = tokio::spawn(
            async move {
                let _access = guard.write().await;
                debug!(domain = %task_domain, "Running resolver script");
                script.run(&task_domain).await
            }
            .in_current_span(),
        );

        match run.await {
            Ok(Ok(run)) if run.success => {
                info!(domain = %domain, "Domain resolved");
                debug!(domain = %domain, output = %run.output, "Resolver script output");
                Ok(ResolutionOutcome::Success)
            }
            Ok(Ok(run)) => {
                warn!(
                    domain = %domain,
                    exit_code = ?run.exit_code,
                    output = %run.output,
                    "Resolver script failed"
                );
                Ok(ResolutionOutcome::failure())
            }
            Ok(Err(e)) => {
                error!(domain = %domain, error = %e, "Resolver script did not complete");
                Ok(ResolutionOutcome::failure())
            }
            Err(e) => {
                error!(domain = %domain, error = %e, "Resolver task aborted");
                Ok(ResolutionOutcome::failure())
            }
        }
    }
}
