//! Configuration types and parsing for rowlift.yml
//!
//! Everything the pipeline needs is passed in from here: source path, batch
//! size, target relation, artifact directory, store location, column labels,
//! and lookup relation names. Nothing is hardcoded in the components.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::mapper::ColumnMap;
use crate::statement::LookupRelations;

/// Main project configuration from rowlift.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Path to the source extract (CSV with a fixed header row)
    pub source_path: String,

    /// Statements per submission batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Target relation receiving the migrated records
    #[serde(default = "default_target_table")]
    pub target_table: String,

    /// Directory for batch artifacts and load state
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Target store connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Source column labels
    #[serde(default)]
    pub columns: ColumnMap,

    /// Reference relations for write-time lookups
    #[serde(default)]
    pub lookups: LookupRelations,
}

/// Target store connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database path (file-based or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_batch_size() -> usize {
    crate::batch::DEFAULT_BATCH_SIZE
}

fn default_target_table() -> String {
    "people".to_string()
}

fn default_out_dir() -> String {
    "target/batches".to_string()
}

fn default_db_path() -> String {
    "rowlift.duckdb".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                message: e.to_string(),
            })?;

        Ok(config)
    }

    /// Path of the persisted load state within the artifact directory
    pub fn load_state_path(&self) -> PathBuf {
        Path::new(&self.out_dir).join("load_state.json")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
