use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// What to do with a data row whose numeric field does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MalformedPolicy {
    /// Treat the field as 0 and keep the row
    #[default]
    Zero,
    /// Drop the row with a warning
    Skip,
    /// Stop loading with an error
    Abort,
}

#[derive(Debug, Parser)]
#[command(name = "charts")]
#[command(about = "Generate poly charts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data input
    #[arg(long, env = "CHARTS_FILE", default_value = "data.txt")]
    pub file: PathBuf,

    /// Data output
    #[arg(long, env = "CHARTS_PATH", default_value = "data")]
    pub path: String,

    /// Directory the charts are written to
    #[arg(long, env = "CHARTS_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Handling of rows with non-numeric durations or chain ids
    #[arg(long, env = "CHARTS_ON_MALFORMED", value_enum, default_value_t = MalformedPolicy::Zero)]
    pub on_malformed: MalformedPolicy,

    /// JSON file overriding chain names, e.g. {"names": {"2": "Ethereum"}}
    #[arg(long, env = "CHAIN_NAMES_FILE")]
    pub chain_names: Option<PathBuf>,
}

/// Settings for a single chart
#[derive(Debug, Clone, Default)]
pub struct ChartOptions {
    /// Appended to every chart title
    pub title_suffix: String,
}

/// Settings for one full report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub file: PathBuf,
    pub path: String,
    pub out_dir: PathBuf,
    pub policy: MalformedPolicy,
    pub chart: ChartOptions,
}

impl From<&Cli> for ReportOptions {
    fn from(cli: &Cli) -> Self {
        ReportOptions {
            file: cli.file.clone(),
            path: cli.path.clone(),
            out_dir: cli.out_dir.clone(),
            policy: cli.on_malformed,
            chart: ChartOptions {
                title_suffix: format!(" - {}", cli.path),
            },
        }
    }
}
