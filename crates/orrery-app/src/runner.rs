//! Headless driver: run the showcase on a framebuffer for a fixed number of
//! frames.

use std::path::PathBuf;

use orrery_config::Config;
use orrery_render::Framebuffer;
use tracing::{info, instrument};

use crate::AppError;
use crate::clock::Clock;
use crate::input::ScriptedButton;
use crate::showcase::Showcase;
use crate::snapshot::SnapshotWriter;

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub frames: u32,
    /// Scaled simulation seconds at the end of the run.
    pub simulated_seconds: f32,
    /// Shader presses the showcase accepted.
    pub shader_changes: u32,
    pub snapshots: Vec<PathBuf>,
    /// The last rendered frame.
    pub framebuffer: Framebuffer,
}

/// Run `config.showcase.frames` frames against `clock`.
#[instrument(skip_all, fields(frames = config.showcase.frames))]
pub fn run<C: Clock>(config: &Config, clock: &mut C) -> Result<RunSummary, AppError> {
    let showcase_config = &config.showcase;
    let mut framebuffer = Framebuffer::new(config.display.width, config.display.height);
    let snapshots_writer = if showcase_config.snapshot_every > 0 {
        Some(SnapshotWriter::create(
            &showcase_config.output_dir,
            showcase_config.snapshot_format,
        )?)
    } else {
        None
    };
    let frame_ms = 1000 / u64::from(showcase_config.target_fps.max(1));

    let mut button = ScriptedButton::new(showcase_config.press_every);
    let mut showcase = Showcase::new(config, clock.now_ms());
    showcase.init(&mut framebuffer);

    let mut shader_changes = 0;
    let mut snapshots = Vec::new();
    for frame in 0..showcase_config.frames {
        clock.advance_frame(frame_ms);
        button.set_frame(frame);

        let before = showcase.current_shader();
        showcase.update(clock.now_ms(), &button, &mut framebuffer);
        if showcase.current_shader() != before {
            shader_changes += 1;
        }
        showcase.render(&mut framebuffer);

        if let Some(writer) = &snapshots_writer
            && frame % showcase_config.snapshot_every == 0
        {
            snapshots.push(writer.write(frame, &framebuffer)?);
        }
    }

    let summary = RunSummary {
        frames: showcase_config.frames,
        simulated_seconds: showcase.system().total_time(),
        shader_changes,
        snapshots,
        framebuffer,
    };
    info!(
        "Rendered {} frames, {:.2}s simulated, {} shader changes, {} snapshots",
        summary.frames,
        summary.simulated_seconds,
        summary.shader_changes,
        summary.snapshots.len()
    );
    Ok(summary)
}
