mod app;
mod config;
mod converter;
mod error;
mod loader;
mod logger;
mod plotter;
mod types;
mod utils;

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, error, info, warn};

use config::AppConfig;
use converter::UnitConverter;
use error::Result;
use types::Summary;

#[derive(Parser)]
#[command(name = "SensePlot")]
#[command(bin_name = "sense_plot")]
#[command(about = "Plot accelerometer and gyroscope samples recorded to CSV")]
struct Cli {
    /// CSV recording with numero_amostra, accel_x/y/z and giro_x/y/z columns.
    /// Asked for interactively when omitted.
    file: Option<PathBuf>,

    /// TOML file with calibration and display settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    logger::init_logger();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, config_path) = AppConfig::resolve(cli.config.as_deref())?;
    match config_path {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("Using built-in configuration"),
    }

    if let Some(path) = &cli.write_config {
        config.save_to_file(path)?;
        info!("Configuration written to {}", path.display());
        return Ok(());
    }

    let path = match cli.file {
        Some(path) => path,
        None => {
            let latest = utils::find_latest_recording(Path::new("."));
            loader::prompt_for_path(io::stdin().lock(), io::stdout(), latest.as_deref())?
        }
    };
    info!("Reading {}", path.display());

    let table = loader::load_from_path(&path)?;
    let converted = UnitConverter::new(&config.calibration).convert(&table);
    if converted.is_empty() {
        warn!("No samples to plot, duration is undefined");
    } else {
        debug!("First raw row: {:?}", converted.raw_table().rows()[0]);
    }
    let summary = Summary::from_table(&converted);

    app::run_viewer(&path, &converted, &config)?;

    println!("\n{}", summary);
    Ok(())
}
