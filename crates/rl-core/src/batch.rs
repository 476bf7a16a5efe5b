//! Batch partitioning and statement-stream parsing
//!
//! A batch is the atomic unit of submission to the target store. Partitioning
//! is pure grouping: no filtering, no reordering, and the final batch is left
//! smaller rather than padded.

use crate::statement::WriteStatement;

/// Default number of statements per batch.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// An ordered, bounded group of write statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// 1-based ordinal
    pub number: usize,
    pub statements: Vec<WriteStatement>,
}

impl Batch {
    /// Concatenate the batch's statements into one submission unit,
    /// separated by a single space.
    pub fn render(&self) -> String {
        self.statements
            .iter()
            .map(WriteStatement::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Group statements into batches of at most `batch_size`, preserving input
/// order within and across batches. Produces ceil(N / batch_size) batches
/// numbered from 1.
pub fn partition(statements: Vec<WriteStatement>, batch_size: usize) -> Vec<Batch> {
    // A zero size would never terminate; treat it as one statement per batch.
    let batch_size = batch_size.max(1);
    statements
        .chunks(batch_size)
        .enumerate()
        .map(|(i, chunk)| Batch {
            number: i + 1,
            statements: chunk.to_vec(),
        })
        .collect()
}

/// Approximate number of statements embedded in rendered SQL.
///
/// Counts occurrences of the statement keyword, so a keyword inside a string
/// literal skews the figure. Callers must present this as approximate,
/// never as authoritative.
pub fn approx_statement_count(sql: &str) -> usize {
    sql.matches("INSERT INTO").count()
}

/// Re-assemble `;`-terminated statements from raw SQL text.
///
/// Blank lines and `--` comment lines are skipped. A statement may span
/// several lines and ends at a line whose last character is `;`; a trailing
/// unterminated fragment is discarded.
pub fn collect_statements(text: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("--") {
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);

        if line.ends_with(';') {
            statements.push(std::mem::take(&mut current));
        }
    }

    statements
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
