//! Launch Records Dashboard - outcome share and payload correlation viewer.

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use launch_dash::config::DashboardConfig;
use launch_dash::gui::LaunchDashApp;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "launch_dash", version, about = "Launch Records Dashboard")]
struct Args {
    /// CSV file with launch records
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = args.data {
        config.data_path = data;
    }
    info!("Starting dashboard with {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Launch Records Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(LaunchDashApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
