//! datapeek - Quick-look summaries for delimited tabular data
//!
//! Loads delimited text files (CSV, TSV) into an in-memory table and reports
//! the first rows, the row/column shape, and the ordered column names with
//! their inferred types.

pub mod config;
pub mod inspect;
pub mod model;
pub mod parser;
pub mod report;

pub use config::Config;
pub use inspect::DatasetSummary;
pub use model::Table;
