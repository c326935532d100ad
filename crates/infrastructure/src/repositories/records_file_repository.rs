use async_trait::async_trait;
use dnsview_application::ports::RecordsRepository;
use dnsview_domain::{DomainError, ResolutionTable};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, error};

/// Reads the resolution table the resolver script leaves on disk.
pub struct JsonFileRecordsRepository {
    path: PathBuf,
}

impl JsonFileRecordsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[async_trait]
impl RecordsRepository for JsonFileRecordsRepository {
    async fn load(&self) -> Result<ResolutionTable, DomainError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to read records file");
            DomainError::RecordsUnavailable {
                file: self.file_name(),
                reason: e.to_string(),
            }
        })?;

        let table = ResolutionTable::from_json(&bytes).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to parse records file");
            DomainError::InvalidRecordsFormat(e.to_string())
        })?;

        debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            name_servers = table.len(),
            "Records file parsed"
        );

        Ok(table)
    }
}
