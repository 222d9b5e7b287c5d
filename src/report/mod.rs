//! Report rendering for dataset summaries

mod json;
mod terminal;

use std::io::IsTerminal;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::OutputFormat;
use crate::inspect::DatasetSummary;

pub use json::JsonReport;
pub use terminal::TerminalReport;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Render one dataset summary to a writer
    fn render(&self, summary: &DatasetSummary, writer: &mut dyn WriteColor) -> Result<()>;
}

/// Factory for creating report formatters
pub struct ReportFactory;

impl ReportFactory {
    /// Create a report formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalReport::new()),
            OutputFormat::Json => Box::new(JsonReport::new()),
        }
    }
}

/// Render one dataset summary to stdout
pub fn render_to_stdout(summary: &DatasetSummary, format: OutputFormat) -> Result<()> {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let formatter = ReportFactory::create(format);
    let mut stdout = StandardStream::stdout(choice);
    formatter.render(summary, &mut stdout)
}
