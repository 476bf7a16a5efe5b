//! Batch artifacts on disk
//!
//! `build` writes one `batch_<n>.sql` file per batch plus a `manifest.json`
//! index; `load` and `report` consume them. The manifest records enough for
//! an operator to sanity-check scale before anything is submitted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::batch::Batch;
use crate::error::{CoreError, CoreResult};

/// File name of the batch index within the artifact directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// File name for a batch ordinal.
pub fn batch_file_name(number: usize) -> String {
    format!("batch_{}.sql", number)
}

/// Index of a written batch set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchManifest {
    pub total_statements: usize,
    pub total_batches: usize,
    pub batch_size: usize,
    pub batches: Vec<BatchEntry>,
}

/// One written batch file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    /// 1-based ordinal
    pub number: usize,
    pub statement_count: usize,
    /// Length of the rendered SQL in characters
    pub char_length: usize,
    /// File name relative to the artifact directory
    pub file: String,
}

/// Write every batch plus the manifest into `dir`, creating it if needed.
pub fn write_batches(dir: &Path, batches: &[Batch], batch_size: usize) -> CoreResult<BatchManifest> {
    if batches.is_empty() {
        log::warn!("no batches to write to {}", dir.display());
    }
    fs::create_dir_all(dir)?;

    let mut entries = Vec::with_capacity(batches.len());
    let mut total_statements = 0;

    for batch in batches {
        let sql = batch.render();
        let file = batch_file_name(batch.number);
        fs::write(dir.join(&file), &sql)?;

        total_statements += batch.statements.len();
        entries.push(BatchEntry {
            number: batch.number,
            statement_count: batch.statements.len(),
            char_length: sql.chars().count(),
            file,
        });
    }

    let manifest = BatchManifest {
        total_statements,
        total_batches: batches.len(),
        batch_size,
        batches: entries,
    };

    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(dir.join(MANIFEST_FILE), json)?;

    Ok(manifest)
}

impl BatchManifest {
    /// Load a previously written manifest from `dir`.
    pub fn load(dir: &Path) -> CoreResult<Self> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(CoreError::ArtifactMissing {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Read one batch's rendered SQL from the artifact directory.
    pub fn read_batch(&self, dir: &Path, entry: &BatchEntry) -> CoreResult<String> {
        let path = dir.join(&entry.file);
        if !path.exists() {
            return Err(CoreError::ArtifactMissing {
                path: path.display().to_string(),
            });
        }
        fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{SqlValue, WriteStatement};
    use tempfile::TempDir;

    fn batch(number: usize, count: usize) -> Batch {
        let statements = (0..count)
            .map(|i| WriteStatement {
                relation: "people".to_string(),
                columns: vec![(
                    "first_name".to_string(),
                    SqlValue::Literal(format!("p{}", i)),
                )],
            })
            .collect();
        Batch { number, statements }
    }

    #[test]
    fn test_write_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let batches = vec![batch(1, 2), batch(2, 1)];

        let written = write_batches(dir.path(), &batches, 2).unwrap();
        assert_eq!(written.total_statements, 3);
        assert_eq!(written.total_batches, 2);
        assert!(dir.path().join("batch_1.sql").exists());
        assert!(dir.path().join("batch_2.sql").exists());

        let loaded = BatchManifest::load(dir.path()).unwrap();
        assert_eq!(loaded.total_statements, 3);
        assert_eq!(loaded.batches[0].statement_count, 2);
        assert_eq!(loaded.batches[1].file, "batch_2.sql");
    }

    #[test]
    fn test_char_length_matches_rendered_sql() {
        let dir = TempDir::new().unwrap();
        let batches = vec![batch(1, 2)];

        let manifest = write_batches(dir.path(), &batches, 50).unwrap();
        let sql = manifest
            .read_batch(dir.path(), &manifest.batches[0])
            .unwrap();
        assert_eq!(manifest.batches[0].char_length, sql.chars().count());
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let err = BatchManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::ArtifactMissing { .. }));
    }

    #[test]
    fn test_read_missing_batch_file() {
        let dir = TempDir::new().unwrap();
        let manifest = write_batches(dir.path(), &[batch(1, 1)], 50).unwrap();
        std::fs::remove_file(dir.path().join("batch_1.sql")).unwrap();

        let err = manifest
            .read_batch(dir.path(), &manifest.batches[0])
            .unwrap_err();
        assert!(matches!(err, CoreError::ArtifactMissing { .. }));
    }
}
