//! Load command implementation
//!
//! Submits written batches to the target store, one batch per atomic
//! submission. A rejected batch is reported with its ordinal and size and
//! the run continues with the next batch; nothing is retried implicitly.

use anyhow::{Context, Result};
use rl_core::{approx_statement_count, BatchEntry, BatchManifest, Config, LoadState};
use rl_db::{DuckDbBackend, Store};
use std::path::Path;
use std::sync::Arc;

use crate::cli::{GlobalArgs, LoadArgs};

/// Execute the load command
pub async fn execute(args: &LoadArgs, global: &GlobalArgs) -> Result<()> {
    let config =
        Config::load(Path::new(&global.config)).context("Failed to load configuration")?;
    let out_dir = Path::new(&config.out_dir);

    let manifest = BatchManifest::load(out_dir)
        .context("Failed to load batch manifest (run `rl build` first)")?;

    if manifest.batches.is_empty() {
        println!("No batches to load.");
        return Ok(());
    }

    let from = args.from.unwrap_or(1);
    let to = args.to.unwrap_or(manifest.total_batches);

    let selected: Vec<&BatchEntry> = manifest
        .batches
        .iter()
        .filter(|b| b.number >= from && b.number <= to)
        .collect();

    if selected.is_empty() {
        println!("No batches in range {}..={}.", from, to);
        return Ok(());
    }

    // Pre-flight report: the operator sees the scale before anything is
    // committed to the store.
    println!(
        "{} statements in {} batches (batch size {})",
        manifest.total_statements, manifest.total_batches, manifest.batch_size
    );
    for entry in &selected {
        println!(
            "  batch {}: {} statements, {} chars",
            entry.number, entry.statement_count, entry.char_length
        );
    }
    println!();

    if args.dry_run {
        println!("Dry run: nothing submitted.");
        return Ok(());
    }

    let db_path = global.target.as_ref().unwrap_or(&config.database.path);
    let store: Arc<dyn Store> =
        Arc::new(DuckDbBackend::new(db_path).context("Failed to open target store")?);

    if global.verbose {
        eprintln!(
            "[verbose] Submitting batches {}..={} to {} store at {}",
            from,
            to,
            store.store_type(),
            db_path
        );
    }

    let mut state = LoadState::new(selected.iter().map(|b| b.number));
    let state_path = config.load_state_path();

    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for entry in &selected {
        let sql = match manifest.read_batch(out_dir, entry) {
            Ok(sql) => sql,
            Err(e) => {
                failed += 1;
                state.mark_failed(entry.number, &e.to_string());
                state.save(&state_path)?;
                println!("  ✗ batch {} - {}", entry.number, e);
                continue;
            }
        };

        // Keyword counting, so approximate by contract.
        let approx = approx_statement_count(&sql);
        let chars = sql.chars().count();

        state.mark_submitted(entry.number);
        match store.execute_batch(&sql).await {
            Ok(()) => {
                succeeded += 1;
                state.mark_succeeded(entry.number);
                println!(
                    "  ✓ batch {}/{} (~{} statements, {} chars)",
                    entry.number, manifest.total_batches, approx, chars
                );
            }
            Err(e) => {
                failed += 1;
                state.mark_failed(entry.number, &e.to_string());
                println!(
                    "  ✗ batch {}/{} (~{} statements, {} chars) - {}",
                    entry.number, manifest.total_batches, approx, chars, e
                );
            }
        }
        state.save(&state_path)?;
    }

    println!();
    println!("Loaded {} batches, {} failed", succeeded, failed);
    if failed > 0 {
        println!(
            "Failed batch ordinals: {:?} (state in {})",
            state.failed_batch_numbers(),
            state_path.display()
        );
        // Exit code 4 = store error: at least one batch was rejected
        std::process::exit(4);
    }

    Ok(())
}
