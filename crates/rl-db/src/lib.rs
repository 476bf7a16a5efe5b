//! rl-db - Store abstraction layer for Rowlift
//!
//! This crate provides the `Store` trait and a DuckDB implementation used
//! as the batch submission endpoint.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::Store;
