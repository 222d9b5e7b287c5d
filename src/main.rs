//! datapeek - Quick-look summaries for delimited tabular data

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use datapeek::config::{Config, OutputFormat, DEFAULT_PREVIEW_ROWS};
use datapeek::inspect::inspect_file;
use datapeek::report::render_to_stdout;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Quick-look summaries for delimited tabular data files
#[derive(Parser, Debug)]
#[command(name = "datapeek")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to inspect, in order
    #[arg(default_values_os_t = [
        PathBuf::from("datasets/GDP_datasets/GDP.csv"),
        PathBuf::from("datasets/economy-and-growth.csv"),
    ])]
    files: Vec<PathBuf>,

    /// How many leading rows to preview
    #[arg(short = 'n', long = "rows", default_value_t = DEFAULT_PREVIEW_ROWS)]
    rows: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Field delimiter (single ASCII character; inferred from the file when absent)
    #[arg(short, long)]
    delimiter: Option<char>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::new(cli.files)
        .with_preview_rows(cli.rows)
        .with_output_format(cli.format.into());

    if let Some(c) = cli.delimiter {
        anyhow::ensure!(c.is_ascii(), "delimiter must be a single ASCII character");
        config = config.with_delimiter(c as u8);
    }

    // Each file is inspected and reported on its own; a failure stops the run.
    for path in &config.files {
        let summary = inspect_file(path, &config)?;
        render_to_stdout(&summary, config.output_format)?;
    }

    Ok(())
}
