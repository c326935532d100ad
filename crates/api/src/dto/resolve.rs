use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    /// A missing field decodes to an empty string and is rejected later.
    #[serde(default, alias = "Domain", alias = "DOMAIN")]
    pub domain: String,
}
