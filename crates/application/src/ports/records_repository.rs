use async_trait::async_trait;
use dnsview_domain::{DomainError, ResolutionTable};

#[async_trait]
pub trait RecordsRepository: Send + Sync {
    /// Read and decode the current records file.
    ///
    /// Any I/O failure, including a missing file, maps to
    /// `DomainError::RecordsUnavailable`; undecodable content maps to
    /// `DomainError::InvalidRecordsFormat`.
    async fn load(&self) -> Result<ResolutionTable, DomainError>;
}
