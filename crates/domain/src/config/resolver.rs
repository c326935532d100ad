use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Script path, relative to the shared directory unless absolute.
    #[serde(default = "default_script")]
    pub script: String,

    /// Kill the script after this many seconds. Unset waits forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Hold an exclusive lock on the records file while the script runs.
    /// Readers wait for the run to end, so this requires `timeout_secs`.
    #[serde(default)]
    pub serialize_access: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script: default_script(),
            timeout_secs: None,
            serialize_access: false,
        }
    }
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_script() -> String {
    "dns_test.py".to_string()
}
