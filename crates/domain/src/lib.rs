//! DNSView Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod resolution;
pub mod resolution_table;

pub use config::{CliOverrides, Config};
pub use dns_record::{DnsRecordSet, RecordType};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use resolution::ResolutionOutcome;
pub use resolution_table::{NameServerRecords, ResolutionTable};
