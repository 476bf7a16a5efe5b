//! Report command implementation
//!
//! Inspection only: prints statement and size figures for written batch
//! artifacts, or for an arbitrary SQL file, without touching the store.

use anyhow::{Context, Result};
use rl_core::{
    approx_statement_count, collect_statements, BatchManifest, BatchStatus, Config, LoadState,
};
use std::path::Path;

use crate::cli::{GlobalArgs, ReportArgs};

/// Execute the report command
pub async fn execute(args: &ReportArgs, global: &GlobalArgs) -> Result<()> {
    if let Some(file) = &args.file {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file))?;
        let statements = collect_statements(&text);
        println!(
            "{}: {} statements (~{} by keyword count), {} chars",
            file,
            statements.len(),
            approx_statement_count(&text),
            text.chars().count()
        );
        return Ok(());
    }

    let config =
        Config::load(Path::new(&global.config)).context("Failed to load configuration")?;
    let out_dir = Path::new(&config.out_dir);
    let manifest = BatchManifest::load(out_dir)
        .context("Failed to load batch manifest (run `rl build` first)")?;

    println!(
        "{} statements in {} batches (batch size {})",
        manifest.total_statements, manifest.total_batches, manifest.batch_size
    );

    for entry in &manifest.batches {
        // The keyword count is recomputed from the file so drift between
        // manifest and artifact shows up here.
        let approx = manifest
            .read_batch(out_dir, entry)
            .map(|sql| approx_statement_count(&sql));
        match approx {
            Ok(approx) => println!(
                "  batch {}: {} statements (~{} by keyword count), {} chars",
                entry.number, entry.statement_count, approx, entry.char_length
            ),
            Err(e) => println!("  batch {}: {}", entry.number, e),
        }
    }

    if let Some(state) = LoadState::load(&config.load_state_path())? {
        let summary = state.summary();
        println!();
        println!(
            "Last load run {}: {} succeeded, {} failed, {} pending",
            state.run_id, summary.succeeded, summary.failed, summary.pending
        );
        for batch in state
            .batches
            .iter()
            .filter(|b| b.status == BatchStatus::Failed)
        {
            println!(
                "  batch {} {}: {}",
                batch.number,
                batch.status,
                batch.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
