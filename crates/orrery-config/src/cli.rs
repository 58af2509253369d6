//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use orrery_shade::ShaderKind;
use orrery_space::ScenePreset;

use crate::{Config, SnapshotFormat};

/// Headless procedural solar-system renderer.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural solar-system renderer")]
pub struct CliArgs {
    /// Surface width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Frames to render before exiting.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Body set to start with (showcase, orrery).
    #[arg(long)]
    pub scene: Option<ScenePreset>,

    /// Shader of the first body (mercury, venus, earth, jupiter, saturn, neptune).
    #[arg(long)]
    pub shader: Option<ShaderKind>,

    /// Simulation speed multiplier.
    #[arg(long)]
    pub time_scale: Option<f32>,

    /// Write every Nth frame to the output directory.
    #[arg(long)]
    pub snapshot_every: Option<u32>,

    /// Snapshot encoding.
    #[arg(long, value_enum)]
    pub format: Option<SnapshotFormat>,

    /// Snapshot output directory.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Press the shader button every Nth frame.
    #[arg(long)]
    pub press_every: Option<u32>,

    /// Pace frames against the wall clock.
    #[arg(long)]
    pub realtime: bool,

    /// Dot the orbit paths.
    #[arg(long)]
    pub orbits: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.display.width = w;
        }
        if let Some(h) = args.height {
            self.display.height = h;
        }
        if let Some(frames) = args.frames {
            self.showcase.frames = frames;
        }
        if let Some(scene) = args.scene {
            self.simulation.scene = scene;
        }
        if let Some(shader) = args.shader {
            self.simulation.initial_shader = shader;
        }
        if let Some(scale) = args.time_scale {
            self.simulation.time_scale = scale;
        }
        if let Some(every) = args.snapshot_every {
            self.showcase.snapshot_every = every;
        }
        if let Some(format) = args.format {
            self.showcase.snapshot_format = format;
        }
        if let Some(ref dir) = args.output {
            self.showcase.output_dir = dir.clone();
        }
        if let Some(every) = args.press_every {
            self.showcase.press_every = every;
        }
        if args.realtime {
            self.showcase.realtime = true;
        }
        if args.orbits {
            self.showcase.show_orbits = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(640),
            scene: Some(ScenePreset::Orrery),
            shader: Some(ShaderKind::Jupiter),
            format: Some(SnapshotFormat::Raw),
            orbits: true,
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.display.width, 640);
        assert_eq!(config.simulation.scene, ScenePreset::Orrery);
        assert_eq!(config.simulation.initial_shader, ShaderKind::Jupiter);
        assert_eq!(config.showcase.snapshot_format, SnapshotFormat::Raw);
        assert!(config.showcase.show_orbits);
        // Non-overridden fields retain defaults
        assert_eq!(config.display.height, 240);
        assert_eq!(config.showcase.frames, 300);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "orrery",
            "--shader",
            "saturn",
            "--scene",
            "orrery",
            "--format",
            "raw",
            "--frames",
            "12",
            "--realtime",
        ])
        .unwrap();
        assert_eq!(args.shader, Some(ShaderKind::Saturn));
        assert_eq!(args.scene, Some(ScenePreset::Orrery));
        assert_eq!(args.format, Some(SnapshotFormat::Raw));
        assert_eq!(args.frames, Some(12));
        assert!(args.realtime);
        assert!(!args.orbits);
    }

    #[test]
    fn test_parse_rejects_unknown_shader() {
        assert!(CliArgs::try_parse_from(["orrery", "--shader", "pluto"]).is_err());
    }
}
