//! Dataset inspection: condense a loaded table into a summary

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::config::Config;
use crate::model::{Column, Row, Table};
use crate::parser::ParserFactory;

/// Quick-look summary of one dataset
#[derive(Debug)]
pub struct DatasetSummary {
    /// Source file
    pub path: PathBuf,
    /// Total number of data rows
    pub row_count: usize,
    /// Total number of columns
    pub column_count: usize,
    /// Columns in header order, with inferred types
    pub columns: Vec<Column>,
    /// First rows of the dataset, in file order
    pub preview: Vec<Row>,
}

impl DatasetSummary {
    /// Shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.column_count)
    }

    /// Column names in header order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Condense a table into a summary with the first `preview_rows` rows
pub fn summarize(table: &Table, path: &Path, preview_rows: usize) -> DatasetSummary {
    DatasetSummary {
        path: path.to_path_buf(),
        row_count: table.row_count(),
        column_count: table.column_count(),
        columns: table.columns.clone(),
        preview: table.head(preview_rows).to_vec(),
    }
}

/// Load one file and summarize it.
///
/// Each call is independent; inspecting one file has no bearing on the next.
pub fn inspect_file(path: &Path, config: &Config) -> Result<DatasetSummary> {
    let factory = ParserFactory::new();
    let table = factory
        .parse(path, config)
        .with_context(|| format!("Failed to parse file: {}", path.display()))?;

    debug!("inspecting {}: shape {:?}", path.display(), table.shape());

    Ok(summarize(&table, path, config.preview_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let file = write_temp("x,y\n1,2\n3,4\n5,6\n");
        let config = Config::default();

        let first = inspect_file(file.path(), &config).unwrap();
        let second = inspect_file(file.path(), &config).unwrap();

        assert_eq!(first.row_count, second.row_count);
        assert_eq!(first.column_count, second.column_count);
        assert_eq!(first.column_names(), second.column_names());
    }

    #[test]
    fn test_preview_is_min_of_n_and_rows() {
        let file = write_temp("x,y\n1,2\n3,4\n5,6\n");

        let short = inspect_file(file.path(), &Config::default().with_preview_rows(2)).unwrap();
        assert_eq!(short.preview.len(), 2);
        assert_eq!(short.row_count, 3);

        let long = inspect_file(file.path(), &Config::default().with_preview_rows(10)).unwrap();
        assert_eq!(long.preview.len(), 3);

        // File order preserved
        assert_eq!(long.preview[0].source_line, 2);
        assert_eq!(long.preview[2].source_line, 4);
    }

    #[test]
    fn test_header_only_dataset() {
        let file = write_temp("x,y,z\n");
        let summary = inspect_file(file.path(), &Config::default()).unwrap();
        assert_eq!(summary.row_count, 0);
        assert_eq!(summary.column_names(), vec!["x", "y", "z"]);
        assert!(summary.preview.is_empty());
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let err = inspect_file(Path::new("datasets/nope.csv"), &Config::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to"));
    }
}
