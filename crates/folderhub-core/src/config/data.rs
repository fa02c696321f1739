//! Snapshot data configuration.

use serde::{Deserialize, Serialize};

/// Location of the folder snapshot consumed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the snapshot JSON file.
    #[serde(default = "default_file")]
    pub file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

fn default_file() -> String {
    "data/sample.json".to_string()
}
