//! Per-project table for the run report

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Render one row per processed project, or a placeholder when nothing was processed
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No projects processed.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "PROJECT")]
        project: String,
        #[tabled(rename = "STATUS")]
        status: String,
    }

    fn row(project: &str, status: &str) -> TestRow {
        TestRow {
            project: project.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        assert_eq!(format_table(&items), "No projects processed.");
    }

    #[test]
    fn test_format_table_rows() {
        let result = format_table(&[row("svc-a", "already enabled"), row("svc-b", "enabled")]);

        assert!(result.contains("PROJECT"));
        assert!(result.contains("STATUS"));
        assert!(result.contains("svc-a"));
        assert!(result.contains("already enabled"));
        assert!(result.contains("svc-b"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let result = format_table(&[row("svc-a", "enabled")]);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
