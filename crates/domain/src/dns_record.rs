pub mod record_set;
pub mod record_type;

pub use record_set::DnsRecordSet;
pub use record_type::RecordType;
