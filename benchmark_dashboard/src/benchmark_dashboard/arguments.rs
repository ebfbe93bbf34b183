//!
//! The benchmark dashboard arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The benchmark dashboard arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON configuration file with default values for the flags below.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The action to perform.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark dashboard actions.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Appends a run read from a harness report to a data file.
    Append {
        /// The data file. Created if it does not exist.
        data_path: PathBuf,

        /// Series to append the run to.
        #[arg(long)]
        series: Option<String>,

        /// Harness report with the measurements.
        #[arg(long)]
        input: PathBuf,

        /// Harness report format: `pytest` (default), `customBiggerIsBetter`, or `customSmallerIsBetter`.
        #[arg(long, default_value_t = benchmark_dashboard::Tool::Pytest)]
        tool: benchmark_dashboard::Tool,

        /// JSON file with the measured commit.
        #[arg(long)]
        commit: PathBuf,

        /// Unix timestamp of the run in milliseconds. Defaults to the current time.
        #[arg(long)]
        date: Option<u64>,

        /// Repository URL, written if the data file has none.
        #[arg(long)]
        repo_url: Option<String>,

        /// Maximum number of runs retained in the series.
        #[arg(long)]
        max_items: Option<usize>,

        /// Output file. Defaults to the data file.
        #[arg(long)]
        output_path: Option<PathBuf>,
    },
    /// Renders series of data files as time series per benchmark.
    Render {
        /// Data files.
        /// If only one path is provided and it is a directory, its `*.js` and `*.json` files are used.
        #[arg(required = true)]
        data_paths: Vec<PathBuf>,

        /// Series to render. All series are rendered if none is given.
        #[arg(long)]
        series: Vec<String>,

        /// Regular expression the rendered benchmark names must match.
        #[arg(long)]
        filter: Option<String>,

        /// Output format: `csv`, `xlsx`, or `json`.
        #[arg(long, default_value_t = benchmark_dashboard::OutputFormat::Xlsx)]
        output_format: benchmark_dashboard::OutputFormat,

        /// Output file.
        #[arg(long)]
        output_path: Option<PathBuf>,
    },
    /// Merges several data files into one.
    Merge {
        /// Data files, merged in the given order.
        /// If only one path is provided and it is a directory, its `*.js` and `*.json` files are used.
        #[arg(required = true)]
        data_paths: Vec<PathBuf>,

        /// Output format: `data-js` or `json`.
        #[arg(long, default_value_t = benchmark_dashboard::OutputFormat::DataJs)]
        output_format: benchmark_dashboard::OutputFormat,

        /// Output file.
        #[arg(long)]
        output_path: PathBuf,
    },
}

impl Arguments {
    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Append {
                max_items: Some(0), ..
            } => anyhow::bail!("The `--max-items` value must be positive."),
            Command::Render {
                output_format: benchmark_dashboard::OutputFormat::DataJs,
                ..
            } => anyhow::bail!("Rendered series cannot be written as `data-js`. Use `csv`, `xlsx`, or `json`."),
            Command::Merge { output_format, .. } if !output_format.is_document() => {
                anyhow::bail!(
                    "Merged data cannot be written as `{output_format}`. Use `data-js` or `json`."
                )
            }
            _ => Ok(()),
        }
    }
}
