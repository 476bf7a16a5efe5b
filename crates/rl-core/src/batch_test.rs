use super::*;
use crate::statement::SqlValue;

fn stmt(n: usize) -> WriteStatement {
    WriteStatement {
        relation: "people".to_string(),
        columns: vec![
            (
                "first_name".to_string(),
                SqlValue::Literal(format!("person{}", n)),
            ),
            ("status".to_string(), SqlValue::Literal("active".to_string())),
        ],
    }
}

fn stmts(n: usize) -> Vec<WriteStatement> {
    (0..n).map(stmt).collect()
}

#[test]
fn test_partition_123_by_50() {
    let batches = partition(stmts(123), 50);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].statements.len(), 50);
    assert_eq!(batches[1].statements.len(), 50);
    assert_eq!(batches[2].statements.len(), 23);
    assert_eq!(batches[0].number, 1);
    assert_eq!(batches[2].number, 3);
}

#[test]
fn test_partition_exact_multiple() {
    let batches = partition(stmts(100), 50);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1].statements.len(), 50);
}

#[test]
fn test_partition_empty() {
    assert!(partition(Vec::new(), 50).is_empty());
}

#[test]
fn test_partition_preserves_order_across_boundaries() {
    let batches = partition(stmts(5), 2);
    let flattened: Vec<WriteStatement> = batches
        .into_iter()
        .flat_map(|b| b.statements)
        .collect();
    assert_eq!(flattened, stmts(5));
}

#[test]
fn test_partition_batch_count_property() {
    for n in [0usize, 1, 49, 50, 51, 99, 123, 200] {
        for size in [1usize, 7, 50] {
            let batches = partition(stmts(n), size);
            assert_eq!(batches.len(), n.div_ceil(size), "n={} size={}", n, size);
            for (i, batch) in batches.iter().enumerate() {
                assert_eq!(batch.number, i + 1);
                if i + 1 < batches.len() {
                    assert_eq!(batch.statements.len(), size);
                }
            }
        }
    }
}

#[test]
fn test_partition_zero_size_clamped() {
    let batches = partition(stmts(3), 0);
    assert_eq!(batches.len(), 3);
}

#[test]
fn test_render_joins_with_single_space() {
    let batch = Batch {
        number: 1,
        statements: stmts(2),
    };
    let sql = batch.render();
    assert!(sql.contains("); INSERT INTO"));
    assert!(!sql.contains("\n"));
}

#[test]
fn test_approx_statement_count() {
    let batch = Batch {
        number: 1,
        statements: stmts(3),
    };
    assert_eq!(approx_statement_count(&batch.render()), 3);
}

#[test]
fn test_approx_statement_count_overcounts_literals() {
    // The keyword inside a string literal is counted too; the figure is
    // approximate by contract.
    let sql = "INSERT INTO people (address) VALUES ('INSERT INTO my life');";
    assert_eq!(approx_statement_count(sql), 2);
}

#[test]
fn test_collect_statements_skips_comments_and_blanks() {
    let text = "-- header comment\n\nINSERT INTO people (a) VALUES (1);\n-- another\nINSERT INTO people (a) VALUES (2);\n";
    let statements = collect_statements(text);
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0], "INSERT INTO people (a) VALUES (1);");
}

#[test]
fn test_collect_statements_joins_multiline() {
    let text = "INSERT INTO people (a)\nVALUES (1);";
    let statements = collect_statements(text);
    assert_eq!(statements, vec!["INSERT INTO people (a) VALUES (1);"]);
}

#[test]
fn test_collect_statements_drops_unterminated_tail() {
    let text = "INSERT INTO people (a) VALUES (1);\nINSERT INTO people (a)";
    assert_eq!(collect_statements(text).len(), 1);
}
