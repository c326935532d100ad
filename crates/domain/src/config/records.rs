use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of the records file shared with the resolver script.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    /// Directory holding the records file; also the script's working directory.
    #[serde(default = "default_shared_dir")]
    pub shared_dir: PathBuf,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl RecordsConfig {
    pub fn file_path(&self) -> PathBuf {
        self.shared_dir.join(&self.file_name)
    }

    pub fn shared_dir(&self) -> &Path {
        &self.shared_dir
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            shared_dir: default_shared_dir(),
            file_name: default_file_name(),
        }
    }
}

fn default_shared_dir() -> PathBuf {
    PathBuf::from("..")
}

fn default_file_name() -> String {
    "dns_output.json".to_string()
}
