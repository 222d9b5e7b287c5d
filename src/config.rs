//! Configuration handling for datapeek

use std::path::PathBuf;

use thiserror::Error;

/// Number of preview rows shown when none is requested.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Output format for dataset summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Error returned when an output format string is not recognized
#[derive(Debug, Error)]
#[error("unknown output format: {0}")]
pub struct UnknownFormat(String);

impl std::str::FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Configuration for inspection runs
#[derive(Debug, Clone)]
pub struct Config {
    /// Files to inspect, in order
    pub files: Vec<PathBuf>,
    /// How many leading rows to include in the preview
    pub preview_rows: usize,
    /// Output format
    pub output_format: OutputFormat,
    /// Field delimiter override; inferred from the file when absent
    pub delimiter: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            output_format: OutputFormat::default(),
            delimiter: None,
        }
    }
}

impl Config {
    /// Create a new Config for a list of files
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    /// Set the number of preview rows
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set an explicit field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("terminal".parse::<OutputFormat>().unwrap(), OutputFormat::Terminal);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
