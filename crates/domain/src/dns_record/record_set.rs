use super::RecordType;
use serde::{Deserialize, Serialize};

/// Answers collected from one name-server address, grouped by record type.
///
/// A type that is missing, `null` or an empty list in the source document
/// is left out when serialized again. Keys are read in upper, lower or
/// capitalized form (`MX`, `mx`, `Mx`) and always written upper-case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecordSet {
    #[serde(rename = "A", alias = "a", default, skip_serializing_if = "is_absent")]
    pub a: Option<Vec<String>>,

    #[serde(
        rename = "AAAA",
        alias = "aaaa",
        alias = "Aaaa",
        default,
        skip_serializing_if = "is_absent"
    )]
    pub aaaa: Option<Vec<String>>,

    #[serde(
        rename = "MX",
        alias = "mx",
        alias = "Mx",
        default,
        skip_serializing_if = "is_absent"
    )]
    pub mx: Option<Vec<String>>,

    #[serde(
        rename = "TXT",
        alias = "txt",
        alias = "Txt",
        default,
        skip_serializing_if = "is_absent"
    )]
    pub txt: Option<Vec<String>>,

    #[serde(
        rename = "SOA",
        alias = "soa",
        alias = "Soa",
        default,
        skip_serializing_if = "is_absent"
    )]
    pub soa: Option<Vec<String>>,

    #[serde(
        rename = "CAA",
        alias = "caa",
        alias = "Caa",
        default,
        skip_serializing_if = "is_absent"
    )]
    pub caa: Option<Vec<String>>,
}

fn is_absent(values: &Option<Vec<String>>) -> bool {
    values.as_ref().is_none_or(|v| v.is_empty())
}

impl DnsRecordSet {
    pub fn get(&self, record_type: RecordType) -> Option<&[String]> {
        let values = match record_type {
            RecordType::A => &self.a,
            RecordType::AAAA => &self.aaaa,
            RecordType::MX => &self.mx,
            RecordType::TXT => &self.txt,
            RecordType::SOA => &self.soa,
            RecordType::CAA => &self.caa,
        };
        values.as_deref().filter(|v| !v.is_empty())
    }

    pub fn record_count(&self) -> usize {
        RecordType::ALL
            .iter()
            .filter_map(|t| self.get(*t))
            .map(|v| v.len())
            .sum()
    }
}
