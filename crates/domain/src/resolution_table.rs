use crate::dns_record::DnsRecordSet;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Record sets keyed by the address of the name server that answered.
pub type NameServerRecords = BTreeMap<String, DnsRecordSet>;

/// Contents of the records file written by the resolver script:
/// name-server host -> name-server address -> record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolutionTable(BTreeMap<String, NameServerRecords>);

impl ResolutionTable {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        // A top-level `null` decodes to an empty table.
        let table: Option<Self> = serde_json::from_slice(bytes)?;
        Ok(table.unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of (name server, address) entries across the table.
    pub fn entry_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    /// Number of record values across every entry.
    pub fn record_count(&self) -> usize {
        self.0
            .values()
            .flat_map(BTreeMap::values)
            .map(DnsRecordSet::record_count)
            .sum()
    }
}

/// `null` at the address or record-set level reads as empty.
impl<'de> Deserialize<'de> for ResolutionTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        type Nullable = BTreeMap<String, Option<BTreeMap<String, Option<DnsRecordSet>>>>;

        let raw = Nullable::deserialize(deserializer)?;
        let table = raw
            .into_iter()
            .map(|(name_server, addresses)| {
                let addresses = addresses
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(address, records)| (address, records.unwrap_or_default()))
                    .collect();
                (name_server, addresses)
            })
            .collect();
        Ok(Self(table))
    }
}
