use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::path::PathBuf;

mod analyzer;
mod config;
mod error;

use analyzer::{MalformedPolicy, aggregate_report, render_summary};
use config::{AnalyzerConfig, DEFAULT_LOG_PATH};

#[derive(Parser, Debug)]
#[command(name = "packet-report-analyzer")]
#[command(about = "Aggregate packet send/receive totals from a delivery report", long_about = None)]
struct Args {
    /// Report file to aggregate (overrides the config file)
    log_path: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Warn and continue on malformed lines instead of halting
    #[arg(long)]
    skip_malformed: bool,
}

fn main() -> anyhow::Result<()> {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter(Some("packet_report_analyzer"), LevelFilter::Info)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };

    // Command line beats config, config beats the built-in default.
    let log_path = args
        .log_path
        .or(config.log_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

    let policy = if args.skip_malformed || config.skip_malformed {
        MalformedPolicy::SkipAndWarn
    } else {
        MalformedPolicy::Halt
    };

    info!("Aggregating report {:?}", log_path);

    let totals = aggregate_report(&log_path, policy)?;

    for line in render_summary(&totals) {
        println!("{line}");
    }

    Ok(())
}
