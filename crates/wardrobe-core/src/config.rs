use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::StyleType;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WardrobeConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub generation: GenerationConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory for snapshot files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Style hint used when a generation request carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_style: Option<StyleType>,
}
