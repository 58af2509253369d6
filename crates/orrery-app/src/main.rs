//! `orrery`: render the procedural solar system headlessly.
//!
//! Run with: `cargo run -p orrery-app -- --frames 120 --snapshot-every 30`

use std::process::ExitCode;

use clap::Parser;
use orrery_app::{AppError, ManualClock, SystemClock, run};
use orrery_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_dir.display());
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );
    info!("Config directory: {}", config_dir.display());

    match run_showcase(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_showcase(config: &Config) -> Result<(), AppError> {
    let summary = if config.showcase.realtime {
        run(config, &mut SystemClock::new())?
    } else {
        run(config, &mut ManualClock::new(0))?
    };
    for path in &summary.snapshots {
        info!("Wrote {}", path.display());
    }
    Ok(())
}
