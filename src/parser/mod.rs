//! Parser layer for reading delimited tabular data

mod delimited;

use std::path::Path;

use anyhow::{bail, Result};

use crate::config::Config;
use crate::model::Table;

pub use self::delimited::DelimitedParser;

/// Trait for parsing tabular data files
pub trait Parser: Send + Sync {
    /// Parse a file and return a Table
    fn parse(&self, path: &Path, config: &Config) -> Result<Table>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating parsers based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(DelimitedParser)],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        bail!(
            "Unsupported file format: {}",
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
        )
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let parser = self.get_parser(path)?;
        parser.parse(path, config)
    }
}

/// Pick the field delimiter for a file.
///
/// An explicit override in the config always wins. Otherwise `.csv` and
/// `.tsv`/`.tab` map to their conventional delimiters, and anything else is
/// sniffed from the first line of content.
pub fn select_delimiter(path: &Path, config: &Config) -> u8 {
    if let Some(d) = config.delimiter {
        return d;
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => b',',
        "tsv" | "tab" => b'\t',
        _ => sniff_delimiter(path).unwrap_or(b','),
    }
}

/// Guess the delimiter by counting candidates in the first line.
fn sniff_delimiter(path: &Path) -> Option<u8> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    const CANDIDATES: [u8; 4] = [b',', b'\t', b';', b'|'];

    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;

    CANDIDATES
        .iter()
        .map(|&d| (d, line.bytes().filter(|&b| b == d).count()))
        .filter(|&(_, count)| count > 0)
        .max_by_key(|&(_, count)| count)
        .map(|(d, _)| d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_factory_rejects_unknown_extension() {
        let factory = ParserFactory::new();
        assert!(factory.get_parser(Path::new("data.parquet")).is_err());
        assert!(factory.get_parser(Path::new("data.csv")).is_ok());
        assert!(factory.get_parser(Path::new("data.tsv")).is_ok());
    }

    #[test]
    fn test_select_delimiter_by_extension() {
        let config = Config::default();
        assert_eq!(select_delimiter(Path::new("a.csv"), &config), b',');
        assert_eq!(select_delimiter(Path::new("a.tsv"), &config), b'\t');
    }

    #[test]
    fn test_select_delimiter_override() {
        let config = Config::default().with_delimiter(b';');
        assert_eq!(select_delimiter(Path::new("a.csv"), &config), b';');
    }

    #[test]
    fn test_sniff_delimiter_from_content() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "a;b;c").unwrap();
        writeln!(file, "1;2;3").unwrap();
        assert_eq!(sniff_delimiter(file.path()), Some(b';'));
    }
}
