//! Settings with showcase defaults and RON persistence.

use std::path::{Path, PathBuf};

use orrery_shade::ShaderKind;
use orrery_space::ScenePreset;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

const APP_NAME: &str = "orrery";

/// `<os config dir>/orrery`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub camera: CameraConfig,
    pub simulation: SimulationConfig,
    /// Headless run length, snapshots and the scripted button.
    pub showcase: ShowcaseConfig,
    pub debug: DebugConfig,
}

/// Target surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

/// Initial state of the orbiting camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub distance: f32,
    pub height: f32,
    /// Radians per second.
    pub orbit_speed: f32,
}

/// Scene contents and time stepping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub scene: ScenePreset,
    /// Shader of the first body at startup.
    pub initial_shader: ShaderKind,
    pub time_scale: f32,
    /// Lower bound on a frame's `dt`, in seconds.
    pub min_dt: f32,
    /// Upper bound on a frame's `dt`, in seconds.
    pub max_dt: f32,
    pub star_seed: u64,
    pub star_count: u32,
}

/// How frames are dumped to disk.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum SnapshotFormat {
    /// 8-bit RGB PNG.
    #[default]
    Png,
    /// Raw native-endian RGB565, as sent to the display.
    Raw,
}

/// Headless showcase run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Frames to run before exiting.
    pub frames: u32,
    /// Simulated frame rate; each frame advances the clock by `1000 / target_fps` ms.
    pub target_fps: u32,
    /// Pace frames against the wall clock instead of simulating time.
    pub realtime: bool,
    /// Write every Nth frame. 0 disables snapshots.
    pub snapshot_every: u32,
    pub snapshot_format: SnapshotFormat,
    pub output_dir: PathBuf,
    /// Press the shader button every Nth frame. 0 never presses.
    pub press_every: u32,
    /// Presses closer together than this are ignored.
    pub debounce_ms: u64,
    /// Dot the planets' orbit paths each frame.
    pub show_orbits: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log an FPS line once per second.
    pub show_fps: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            field_of_view: 60.0,
            distance: 200.0,
            height: 100.0,
            orbit_speed: 0.1,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scene: ScenePreset::Showcase,
            initial_shader: ShaderKind::Mercury,
            time_scale: 0.5,
            min_dt: 0.001,
            max_dt: 0.1,
            star_seed: 12345,
            star_count: 80,
        }
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            frames: 300,
            target_fps: 30,
            realtime: false,
            snapshot_every: 0,
            snapshot_format: SnapshotFormat::Png,
            output_dir: PathBuf::from("frames"),
            press_every: 0,
            debounce_ms: 300,
            show_orbits: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_fps: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE_NAME), serialized)
            .map_err(ConfigError::WriteError)
    }

    /// Re-read the file; `Some` only when it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;
        if &fresh != self {
            log::info!("Config reloaded with changes");
            Ok(Some(fresh))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
