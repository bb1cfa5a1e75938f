//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::Formatter;
use crate::azure::DeletionReport;
use crate::error::Result;

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn render(&self, report: &DeletionReport) -> Result<String> {
        if report.actions.is_empty() {
            return Ok(format!(
                "Nothing to delete in resource group {}",
                report.resource_group
            ));
        }

        let mut table = Table::new();
        table
            .load_preset(NOTHING)
            .set_header(vec!["Kind", "Name", "Result"]);

        for action in &report.actions {
            table.add_row(vec![
                action.kind.to_string(),
                action.name.clone(),
                action.outcome.to_string(),
            ]);
        }

        let mut rendered = table.to_string();
        if report.dry_run {
            rendered.push_str("\n\nDry run: nothing was deleted");
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::{ActionOutcome, ResourceKind};

    #[test]
    fn test_table_formatter_empty() {
        let report = DeletionReport::new("cluster1-oidc", false);
        let out = TableFormatter.render(&report).unwrap();
        assert!(out.contains("Nothing to delete"));
        assert!(out.contains("cluster1-oidc"));
    }

    #[test]
    fn test_table_formatter_with_data() {
        let mut report = DeletionReport::new("cluster1-oidc", false);
        report.record(
            ResourceKind::ManagedIdentity,
            "image-registry",
            ActionOutcome::Deleted,
        );
        report.record(
            ResourceKind::StorageAccount,
            "cluster1",
            ActionOutcome::AlreadyAbsent,
        );

        let out = TableFormatter.render(&report).unwrap();
        assert!(out.contains("Kind"));
        assert!(out.contains("managed identity"));
        assert!(out.contains("image-registry"));
        assert!(out.contains("already absent"));
        assert!(!out.contains("Dry run"));
    }

    #[test]
    fn test_table_formatter_dry_run_footer() {
        let mut report = DeletionReport::new("cluster1-oidc", true);
        report.record(
            ResourceKind::ResourceGroup,
            "cluster1-oidc",
            ActionOutcome::Planned,
        );
        let out = TableFormatter.render(&report).unwrap();
        assert!(out.contains("would delete"));
        assert!(out.contains("Dry run"));
    }
}
