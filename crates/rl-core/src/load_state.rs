//! Load state tracking for batch submission
//!
//! Each batch moves through `pending -> submitted -> succeeded | failed`.
//! The state is persisted as JSON next to the batch artifacts so a partially
//! failed run can be inspected and retried at the batch level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::CoreResult;

/// State of a load run in progress or completed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadState {
    /// Unique identifier for this run
    pub run_id: String,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the state was last updated
    pub last_updated_at: DateTime<Utc>,

    /// Per-batch submission state, in submission order
    pub batches: Vec<BatchState>,
}

/// Submission state of one batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchState {
    /// 1-based batch ordinal
    pub number: usize,

    pub status: BatchStatus,

    /// Error message for failed batches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Status of one batch submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Not yet handed to the store
    Pending,
    /// Handed to the store, awaiting its terminal outcome
    Submitted,
    /// Acknowledged cleanly by the store
    Succeeded,
    /// Rejected by the store
    Failed,
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchStatus::Pending => write!(f, "pending"),
            BatchStatus::Submitted => write!(f, "submitted"),
            BatchStatus::Succeeded => write!(f, "succeeded"),
            BatchStatus::Failed => write!(f, "failed"),
        }
    }
}

impl LoadState {
    /// Create a new load state covering the given batch ordinals
    pub fn new(batch_numbers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string()[..8].to_string(),
            started_at: Utc::now(),
            last_updated_at: Utc::now(),
            batches: batch_numbers
                .into_iter()
                .map(|number| BatchState {
                    number,
                    status: BatchStatus::Pending,
                    error: None,
                })
                .collect(),
        }
    }

    /// Load a previously saved state from a file path
    pub fn load(path: &Path) -> CoreResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let state: LoadState = serde_json::from_str(&content)?;
        Ok(Some(state))
    }

    /// Save the state to a file path atomically
    ///
    /// Uses write-to-temp-then-rename to prevent a torn file when the
    /// process dies mid-write.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    fn batch_mut(&mut self, number: usize) -> Option<&mut BatchState> {
        self.batches.iter_mut().find(|b| b.number == number)
    }

    /// Mark a batch as handed to the store
    pub fn mark_submitted(&mut self, number: usize) {
        if let Some(batch) = self.batch_mut(number) {
            batch.status = BatchStatus::Submitted;
        }
        self.last_updated_at = Utc::now();
    }

    /// Mark a batch as cleanly acknowledged
    pub fn mark_succeeded(&mut self, number: usize) {
        if let Some(batch) = self.batch_mut(number) {
            batch.status = BatchStatus::Succeeded;
            batch.error = None;
        }
        self.last_updated_at = Utc::now();
    }

    /// Mark a batch as rejected by the store
    pub fn mark_failed(&mut self, number: usize, error: &str) {
        if let Some(batch) = self.batch_mut(number) {
            batch.status = BatchStatus::Failed;
            batch.error = Some(error.to_string());
        }
        self.last_updated_at = Utc::now();
    }

    /// Ordinals of failed batches, for retry or manual inspection
    pub fn failed_batch_numbers(&self) -> Vec<usize> {
        self.batches
            .iter()
            .filter(|b| b.status == BatchStatus::Failed)
            .map(|b| b.number)
            .collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> LoadSummary {
        let mut summary = LoadSummary {
            succeeded: 0,
            failed: 0,
            pending: 0,
        };
        for batch in &self.batches {
            match batch.status {
                BatchStatus::Succeeded => summary.succeeded += 1,
                BatchStatus::Failed => summary.failed += 1,
                BatchStatus::Pending | BatchStatus::Submitted => summary.pending += 1,
            }
        }
        summary
    }
}

/// Summary statistics for a load state
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub pending: usize,
}
