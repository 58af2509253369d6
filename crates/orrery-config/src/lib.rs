//! Configuration for the orrery showcase.
//!
//! Settings persist to disk as a RON file, unknown or missing fields fall back
//! to defaults, and command-line flags override whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CameraConfig, Config, DebugConfig, DisplayConfig, ShowcaseConfig,
    SimulationConfig, SnapshotFormat, default_config_dir,
};
pub use error::ConfigError;
