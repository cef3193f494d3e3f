use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod chains;
mod config;
mod models;
mod services;
mod utils;

use chains::ChainNames;
use config::{Cli, ReportOptions};

fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("poly_charts=info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();
    info!("Generating poly charts from {}", cli.file.display());

    let names = match &cli.chain_names {
        Some(path) => match ChainNames::from_file(path) {
            Ok(names) => names,
            Err(e) => {
                error!("Start error: {}", e);
                std::process::exit(1);
            }
        },
        None => ChainNames::builtin(),
    };

    let options = ReportOptions::from(&cli);
    if let Err(e) = services::report_service::show(&options, &names) {
        error!("Failed to show data chart: {}", e);
        std::process::exit(1);
    }
}
