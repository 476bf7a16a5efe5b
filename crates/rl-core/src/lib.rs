//! rl-core - Core library for Rowlift
//!
//! This crate provides the pipeline building blocks shared by all Rowlift
//! components: configuration parsing, field normalization, row mapping,
//! write-statement construction, batch partitioning, batch artifacts, and
//! load-state tracking.

pub mod artifact;
pub mod batch;
pub mod config;
pub mod error;
pub mod load_state;
pub mod mapper;
pub mod normalize;
pub mod record;
pub mod statement;

pub use artifact::{BatchEntry, BatchManifest};
pub use batch::{approx_statement_count, collect_statements, partition, Batch, DEFAULT_BATCH_SIZE};
pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use load_state::{BatchStatus, LoadState, LoadSummary};
pub use mapper::{map_row, validate_header, ColumnMap};
pub use record::CanonicalRecord;
pub use statement::{build_insert, escape_literal, LookupRelations, SqlValue, WriteStatement};
