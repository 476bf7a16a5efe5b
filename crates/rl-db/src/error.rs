//! Error types for rl-db

use thiserror::Error;

/// Store operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Store connection failed: {0}")]
    ConnectionError(String),

    /// Execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Mutex poisoned (D003)
    #[error("[D003] Store mutex poisoned: {0}")]
    MutexPoisoned(String),

    /// Internal error (D004)
    #[error("[D004] Internal store error: {0}")]
    Internal(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
