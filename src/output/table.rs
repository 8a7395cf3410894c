//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, Width, object::Rows},
};

/// Tables wider than this wrap their cells
const MAX_TABLE_WIDTH: usize = 120;

/// Format rows as a rounded table with a centered header
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "No scenarios selected.".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Width::wrap(MAX_TABLE_WIDTH));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "SCENARIO")]
        scenario: &'static str,
        #[tabled(rename = "STATUS")]
        status: &'static str,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<Row> = vec![];
        assert_eq!(format_table(&rows), "No scenarios selected.");
    }

    #[test]
    fn test_format_table_rows_and_style() {
        let rows = vec![
            Row {
                scenario: "create-with-required-fields",
                status: "PASS",
            },
            Row {
                scenario: "delete-non-existing",
                status: "FAIL",
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("SCENARIO"));
        assert!(result.contains("delete-non-existing"));
        assert!(result.contains("FAIL"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_table_wraps_long_cells() {
        let long = "x".repeat(MAX_TABLE_WIDTH * 3);
        let leaked: &'static str = Box::leak(long.into_boxed_str());
        let rows = vec![Row {
            scenario: leaked,
            status: "FAIL",
        }];

        let result = format_table(&rows);
        assert!(result.lines().all(|l| l.chars().count() <= MAX_TABLE_WIDTH));
    }
}
