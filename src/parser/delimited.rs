//! Delimited text file parser (CSV, TSV)

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::config::Config;
use crate::model::{CellValue, Column, Table};

use super::{select_delimiter, Parser};

/// Parser for delimited text files
pub struct DelimitedParser;

impl Parser for DelimitedParser {
    fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let delimiter = select_delimiter(path, config);

        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        // Read headers
        let headers = csv_reader
            .headers()
            .context("Failed to read header row")?
            .clone();

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name.to_string(), i))
            .collect();

        let mut table = Table::new(columns);

        // Read rows
        for (line_num, result) in csv_reader.records().enumerate() {
            let record =
                result.with_context(|| format!("Failed to read row {}", line_num + 2))?; // +2 for 1-indexing and header

            let cells: Vec<CellValue> = record.iter().map(parse_cell_value).collect();

            // Pad with nulls if row has fewer columns
            let cells = if cells.len() < table.column_count() {
                let mut padded = cells;
                padded.resize(table.column_count(), CellValue::Null);
                padded
            } else {
                cells
            };

            table.add_row(cells, line_num + 2); // +2 for 1-indexing and header
        }

        // Infer column types
        infer_column_types(&mut table);

        debug!(
            "parsed {}: {} rows x {} columns (delimiter {:?})",
            path.display(),
            table.row_count(),
            table.column_count(),
            delimiter as char
        );

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext, "csv" | "tsv" | "tab" | "txt" | "dat")
    }
}

/// Parse a string value into a CellValue with type inference
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    // Check for empty/null
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Null;
    }

    // Try parsing as boolean
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    // Try parsing as integer
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    // Try parsing as float
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    // Try parsing as date
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    // Try parsing as datetime (ISO 8601)
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    // Default to string
    CellValue::String(Cow::Owned(trimmed.to_string()))
}

/// Infer column types by widening over every cell in the column
fn infer_column_types(table: &mut Table) {
    let mut inferred: Vec<_> = table.columns.iter().map(|c| c.inferred_type).collect();

    for row in &table.rows {
        for (col_idx, cell) in row.cells.iter().enumerate() {
            if let Some(t) = inferred.get_mut(col_idx) {
                *t = t.widen(cell.cell_type());
            }
        }
    }

    for (col, t) in table.columns.iter_mut().zip(inferred) {
        col.inferred_type = t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellType;
    use std::io::Write;

    fn write_temp(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_cell_value() {
        assert_eq!(parse_cell_value(""), CellValue::Null);
        assert_eq!(parse_cell_value("null"), CellValue::Null);
        assert_eq!(parse_cell_value("NA"), CellValue::Null);
        assert_eq!(parse_cell_value("true"), CellValue::Bool(true));
        assert_eq!(parse_cell_value("false"), CellValue::Bool(false));
        assert_eq!(parse_cell_value("42"), CellValue::Int(42));
        assert_eq!(parse_cell_value("3.14"), CellValue::Float(3.14));
        assert_eq!(
            parse_cell_value("hello"),
            CellValue::String(Cow::Owned("hello".to_string()))
        );
    }

    #[test]
    fn test_parse_counts_match_file() {
        let file = write_temp("a,b,c\n1,2,3\n4,5,6\n", ".csv");
        let table = DelimitedParser
            .parse(file.path(), &Config::default())
            .unwrap();
        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.column_names(), vec!["a", "b", "c"]);
        assert_eq!(table.rows[0].source_line, 2);
    }

    #[test]
    fn test_short_rows_padded_with_nulls() {
        let file = write_temp("a,b,c\n1,2\n", ".csv");
        let table = DelimitedParser
            .parse(file.path(), &Config::default())
            .unwrap();
        assert_eq!(table.rows[0].cells.len(), 3);
        assert!(table.rows[0].cells[2].is_null());
    }

    #[test]
    fn test_header_only_file() {
        let file = write_temp("a,b,c\n", ".csv");
        let table = DelimitedParser
            .parse(file.path(), &Config::default())
            .unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_column_type_inference() {
        let file = write_temp("id,score,label,when\n1,1.5,x,2024-01-01\n2,,y,2024-02-03\n", ".csv");
        let table = DelimitedParser
            .parse(file.path(), &Config::default())
            .unwrap();
        assert_eq!(table.columns[0].inferred_type, CellType::Int);
        assert_eq!(table.columns[1].inferred_type, CellType::Float);
        assert_eq!(table.columns[2].inferred_type, CellType::String);
        assert_eq!(table.columns[3].inferred_type, CellType::Date);
    }

    #[test]
    fn test_tab_delimited() {
        let file = write_temp("a\tb\n1\t2\n", ".tsv");
        let table = DelimitedParser
            .parse(file.path(), &Config::default())
            .unwrap();
        assert_eq!(table.shape(), (1, 2));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = DelimitedParser
            .parse(Path::new("no/such/file.csv"), &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }
}
