//! JSON report format

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use termcolor::WriteColor;

use crate::inspect::DatasetSummary;
use crate::model::CellValue;

use super::ReportFormatter;

/// JSON report formatter
pub struct JsonReport {
    pretty: bool,
}

impl JsonReport {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable summary for JSON output
#[derive(Serialize)]
struct JsonSummary<'a> {
    path: String,
    shape: JsonShape,
    columns: Vec<JsonColumn<'a>>,
    preview: Vec<Vec<&'a CellValue>>,
}

#[derive(Serialize)]
struct JsonShape {
    rows: usize,
    columns: usize,
}

#[derive(Serialize)]
struct JsonColumn<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    inferred_type: &'static str,
}

impl<'a> JsonSummary<'a> {
    fn from_summary(summary: &'a DatasetSummary) -> Self {
        let (rows, columns) = summary.shape();
        Self {
            path: summary.path.display().to_string(),
            shape: JsonShape { rows, columns },
            columns: summary
                .columns
                .iter()
                .map(|c| JsonColumn {
                    name: &c.name,
                    inferred_type: c.inferred_type.name(),
                })
                .collect(),
            preview: summary
                .preview
                .iter()
                .map(|row| row.cells.iter().collect())
                .collect(),
        }
    }
}

impl ReportFormatter for JsonReport {
    fn render(&self, summary: &DatasetSummary, writer: &mut dyn WriteColor) -> Result<()> {
        let json = JsonSummary::from_summary(summary);

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &json)?;
        } else {
            serde_json::to_writer(&mut *writer, &json)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::inspect::inspect_file;
    use termcolor::NoColor;

    #[test]
    fn test_json_round_trips_counts() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "id,label\n1,a\n2,b\n3,c\n").unwrap();
        let summary = inspect_file(file.path(), &Config::default()).unwrap();

        let mut out = NoColor::new(Vec::new());
        JsonReport::compact().render(&summary, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out.into_inner()).unwrap();
        assert_eq!(value["shape"]["rows"], 3);
        assert_eq!(value["shape"]["columns"], 2);
        assert_eq!(value["columns"][0]["name"], "id");
        assert_eq!(value["columns"][0]["type"], "int");
        assert_eq!(value["preview"].as_array().unwrap().len(), 3);
        assert_eq!(value["preview"][0][0], 1);
    }
}
