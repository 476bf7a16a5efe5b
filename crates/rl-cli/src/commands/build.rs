//! Build command implementation
//!
//! Reads the source extract, maps each row, builds deferred-write
//! statements, partitions them, and writes batch artifacts plus the
//! manifest. Data-quality problems in individual rows are counted and
//! skipped, never fatal.

use anyhow::{Context, Result};
use rl_core::{artifact, batch, mapper, statement, Config, CoreError};
use std::path::Path;

use crate::cli::{BuildArgs, GlobalArgs};

/// Execute the build command
pub async fn execute(args: &BuildArgs, global: &GlobalArgs) -> Result<()> {
    let config =
        Config::load(Path::new(&global.config)).context("Failed to load configuration")?;

    let source = args
        .source
        .clone()
        .unwrap_or_else(|| config.source_path.clone());
    let batch_size = args.batch_size.unwrap_or(config.batch_size);
    let out_dir = args.out_dir.clone().unwrap_or_else(|| config.out_dir.clone());

    let source_path = Path::new(&source);
    if !source_path.exists() {
        return Err(CoreError::SourceNotFound { path: source }.into());
    }

    if global.verbose {
        eprintln!(
            "[verbose] Building from {} (batch size {}, target relation {})",
            source, batch_size, config.target_table
        );
    }

    // Rows with the wrong field count still parse; they map like any other
    // row and fall out through the usual skip paths.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(source_path)
        .map_err(CoreError::Csv)?;
    let headers = reader.headers().map_err(CoreError::Csv)?.clone();
    mapper::validate_header(&headers, &config.columns, &source)?;

    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;
    let mut statements = Vec::new();

    for result in reader.records() {
        rows_read += 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                eprintln!("[warn] Skipping unreadable row: {}", e);
                rows_skipped += 1;
                continue;
            }
        };

        let Some(canonical) = mapper::map_row(&headers, &record, &config.columns) else {
            rows_skipped += 1;
            continue;
        };

        match statement::build_insert(&canonical, &config.lookups, &config.target_table) {
            Some(stmt) => statements.push(stmt),
            None => rows_skipped += 1,
        }
    }

    let batches = batch::partition(statements, batch_size);
    let manifest = artifact::write_batches(Path::new(&out_dir), &batches, batch_size)
        .context("Failed to write batch artifacts")?;

    println!("Read {} rows ({} skipped)", rows_read, rows_skipped);
    println!(
        "Built {} statements in {} batches",
        manifest.total_statements, manifest.total_batches
    );
    for entry in &manifest.batches {
        println!(
            "  batch {}/{}: {} statements, {} chars",
            entry.number, manifest.total_batches, entry.statement_count, entry.char_length
        );
    }
    println!("Artifacts written to {}", out_dir);

    Ok(())
}
