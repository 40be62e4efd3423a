// Driver configuration loaded from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PatternError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

/// Settings shared by the demo binaries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Where the serialisation demos write their snapshot files.
    pub snapshot_dir: PathBuf,
    /// Number of threads racing on first access in the concurrent demos.
    pub threads: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            snapshot_dir: std::env::temp_dir(),
            threads: 4,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|source| PatternError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`DemoConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn snapshot_path(&self, file_name: &str) -> PathBuf {
        self.snapshot_dir.join(file_name)
    }
}
