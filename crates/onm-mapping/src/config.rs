use std::path::{Path, PathBuf};

use onm_types::{concat_dirs, DEFAULT_MAPPING_FILENAME, DEFAULT_PERSIST_DIR};
use serde::{Deserialize, Serialize};

use crate::error::{MappingError, MappingResult};

/// Where a mapping is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistConfig {
    /// Directory holding the mapping file. Created on persist if missing.
    pub persist_dir: PathBuf,
    /// Name of the mapping file inside `persist_dir`.
    pub mapping_filename: String,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            persist_dir: PathBuf::from(DEFAULT_PERSIST_DIR),
            mapping_filename: DEFAULT_MAPPING_FILENAME.to_string(),
        }
    }
}

impl PersistConfig {
    /// Config rooted at `persist_dir` with the default filename.
    pub fn in_dir(persist_dir: impl Into<PathBuf>) -> Self {
        Self {
            persist_dir: persist_dir.into(),
            ..Default::default()
        }
    }

    /// Full path of the mapping file.
    pub fn mapping_path(&self) -> PathBuf {
        concat_dirs(&self.persist_dir, &self.mapping_filename)
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> MappingResult<Self> {
        toml::from_str(s).map_err(|e| MappingError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> MappingResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
