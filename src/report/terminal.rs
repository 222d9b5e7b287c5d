//! Human-readable terminal report

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::inspect::DatasetSummary;

use super::ReportFormatter;

/// Terminal report with colored section titles
pub struct TerminalReport;

impl TerminalReport {
    pub fn new() -> Self {
        Self
    }

    fn write_title(&self, writer: &mut dyn WriteColor, title: &str) -> Result<()> {
        writer.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Cyan)))?;
        writeln!(writer, "{}", title)?;
        writer.reset()?;
        Ok(())
    }

    fn write_header(&self, writer: &mut dyn WriteColor, summary: &DatasetSummary) -> Result<()> {
        let rule = "━".repeat(64);
        writeln!(writer, "{}", rule)?;
        self.write_title(writer, &format!(" datapeek: {}", summary.path.display()))?;
        writeln!(writer, "{}", rule)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_shape(&self, writer: &mut dyn WriteColor, summary: &DatasetSummary) -> Result<()> {
        let (rows, columns) = summary.shape();
        writeln!(writer, "Shape: {} rows x {} columns", rows, columns)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_columns(&self, writer: &mut dyn WriteColor, summary: &DatasetSummary) -> Result<()> {
        self.write_title(writer, "Columns:")?;
        let width = summary
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0);
        for column in &summary.columns {
            writeln!(
                writer,
                "  {:2}  {:width$}  {}",
                column.index,
                column.name,
                column.inferred_type,
                width = width
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_preview(&self, writer: &mut dyn WriteColor, summary: &DatasetSummary) -> Result<()> {
        if summary.preview.is_empty() {
            writeln!(writer, "(no data rows)")?;
            return Ok(());
        }

        self.write_title(
            writer,
            &format!("First {} rows:", summary.preview.len()),
        )?;

        let mut builder = Builder::default();

        let mut header = vec!["#".to_string()];
        header.extend(summary.columns.iter().map(|c| c.name.clone()));
        builder.push_record(header);

        for (i, row) in summary.preview.iter().enumerate() {
            let mut record = vec![(i + 1).to_string()];
            record.extend(row.cells.iter().map(|c| c.display().into_owned()));
            builder.push_record(record);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        writeln!(writer, "{}", table)?;
        Ok(())
    }
}

impl Default for TerminalReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TerminalReport {
    fn render(&self, summary: &DatasetSummary, writer: &mut dyn WriteColor) -> Result<()> {
        self.write_header(writer, summary)?;
        self.write_shape(writer, summary)?;
        self.write_columns(writer, summary)?;
        self.write_preview(writer, summary)?;
        writeln!(writer)?;
        Ok(())
    }
}
