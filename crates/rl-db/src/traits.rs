//! Store trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Target-store abstraction for Rowlift
///
/// Implementations must be Send + Sync for async operation. A submitted
/// batch is atomic at the store: either every statement in it lands or the
/// call returns an error and nothing does.
#[async_trait]
pub trait Store: Send + Sync {
    /// Execute a single SQL statement, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute a concatenated group of statements as one atomic unit
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute a query and return its row count
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Store type identifier for logging
    fn store_type(&self) -> &'static str;
}
