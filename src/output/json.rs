//! JSON output formatter

use super::Formatter;
use crate::azure::DeletionReport;
use crate::error::Result;

/// Formatter for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn render(&self, report: &DeletionReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
