//! PC Assembly Simulator - learn to build a computer in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use pcsim_app::config::{self, Settings};
use pcsim_core::prelude::*;
use pcsim_core::logging::{self, LogConfig};
use pcsim_core::ComputerType;

/// PC Assembly Simulator - pick parts, drag them into a chassis, power it on
#[derive(Parser, Debug)]
#[command(name = "pcsim", version)]
#[command(about = "A terminal simulator for learning how to assemble a computer", long_about = None)]
struct Args {
    /// Settings file (defaults to .pcsim/config.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Delay between "Power on" and the outcome, in milliseconds
    #[arg(long, value_name = "MS")]
    boot_delay_ms: Option<u64>,

    /// Target frames per second
    #[arg(long, value_name = "HZ")]
    frame_rate: Option<u32>,

    /// Skip the type selection and start at the shelf
    #[arg(long = "type", value_name = "laptop|desktop")]
    computer_type: Option<ComputerType>,

    /// Directory for the daily log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of loaded settings.
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(delay_ms) = self.boot_delay_ms {
            settings.boot.delay_ms = delay_ms;
        }
        if let Some(frame_rate) = self.frame_rate {
            settings.ui.frame_rate = frame_rate;
        }
        if let Some(computer_type) = self.computer_type {
            settings.start.computer_type = Some(computer_type);
        }
    }

    fn log_config(&self) -> LogConfig {
        match &self.log_dir {
            Some(dir) => LogConfig::in_directory(dir.clone()),
            None => LogConfig::default(),
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path)?,
        None => {
            let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            config::load_settings(&working_dir)
        }
    };
    args.apply_overrides(&mut settings);
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init(&args.log_config())?;

    let settings = load_settings(&args)?;
    debug!("Settings: {:?}", settings);

    let result = pcsim_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("PC assembly simulator exiting");
    result
}
