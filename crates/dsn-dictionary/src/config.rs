//! Build configuration: table names, header policy and usage sheet layout.
//!
//! Read from a TOML file. Every key is optional:
//!
//! ```toml
//! header_policy = "first-wins"
//!
//! [tables]
//! fields = "Rubriques"
//! usage = "Usages"
//!
//! [outputs]
//! dictionary = "Dictionnaire"
//!
//! [usage_layout]
//! first_code_column = 5
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use dsn_model::{DsnError, Result};

use crate::loader::HeaderPolicy;
use crate::usage::UsageLayout;

/// File name looked up in the input directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "dsn-dictionary.toml";

/// Names of the four input tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableNames {
    pub fields: String,
    pub data_types: String,
    pub blocks: String,
    pub usage: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            fields: "Fields".to_string(),
            data_types: "Data Types".to_string(),
            blocks: "Blocks".to_string(),
            usage: "Usage".to_string(),
        }
    }
}

/// Names of the two output tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputNames {
    pub dictionary: String,
    pub nomenclatures: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            dictionary: "Dictionary".to_string(),
            nomenclatures: "Nomenclatures".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryConfig {
    pub tables: TableNames,
    pub outputs: OutputNames,
    pub header_policy: HeaderPolicy,
    pub usage_layout: UsageLayout,
}

impl DictionaryConfig {
    pub fn from_toml_str(path: &Path, raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|error| DsnError::Config {
            path: path.to_path_buf(),
            message: error.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|error| DsnError::io(path, error))?;
        let config = Self::from_toml_str(path, &raw)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Explicit path first, then `dsn-dictionary.toml` in `input_dir`, then defaults.
    pub fn resolve(explicit: Option<&Path>, input_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = input_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }
}
