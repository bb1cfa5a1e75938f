//! Output formatting module
//!
//! Prints the deletion summary as a table or JSON

mod json;
mod table;

use crate::azure::DeletionReport;
use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render the report
    fn render(&self, report: &DeletionReport) -> Result<String>;
}

/// Print a deletion report in the requested format
pub fn output_report(report: &DeletionReport, format: &OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Table => TableFormatter.render(report)?,
        OutputFormat::Json => JsonFormatter.render(report)?,
    };
    println!("{}", rendered);
    Ok(())
}
