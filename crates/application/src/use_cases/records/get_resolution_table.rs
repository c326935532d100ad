use dnsview_domain::{DomainError, ResolutionTable};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RecordsRepository;
use crate::services::RecordsAccessGuard;

pub struct GetResolutionTableUseCase {
    repository: Arc<dyn RecordsRepository>,
    guard: RecordsAccessGuard,
}

impl GetResolutionTableUseCase {
    pub fn new(repository: Arc<dyn RecordsRepository>, guard: RecordsAccessGuard) -> Self {
        Self { repository, guard }
    }

    #[instrument(skip(self), name = "get_resolution_table")]
    pub async fn execute(&self) -> Result<ResolutionTable, DomainError> {
        let _access = self.guard.read().await;
        let table = self.repository.load().await?;

        debug!(
            name_servers = table.len(),
            entries = table.entry_count(),
            records = table.record_count(),
            "Resolution table loaded"
        );

        Ok(table)
    }
}
