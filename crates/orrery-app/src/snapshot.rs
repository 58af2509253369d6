//! Dumping frames to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use orrery_config::SnapshotFormat;
use orrery_render::Framebuffer;

use crate::AppError;

/// Writes numbered frames into one directory.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    dir: PathBuf,
    format: SnapshotFormat,
}

impl SnapshotWriter {
    /// Creates `dir` if it does not exist.
    pub fn create(dir: &Path, format: SnapshotFormat) -> Result<Self, AppError> {
        std::fs::create_dir_all(dir).map_err(AppError::io(dir))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            format,
        })
    }

    /// `frame_NNNNN.png` or `frame_NNNNN.rgb565`.
    pub fn path_for(&self, frame: u32) -> PathBuf {
        let extension = match self.format {
            SnapshotFormat::Png => "png",
            SnapshotFormat::Raw => "rgb565",
        };
        self.dir.join(format!("frame_{frame:05}.{extension}"))
    }

    /// Write one frame, returning the file it went to.
    pub fn write(&self, frame: u32, framebuffer: &Framebuffer) -> Result<PathBuf, AppError> {
        let path = self.path_for(frame);
        let file = File::create(&path).map_err(AppError::io(&path))?;
        let mut out = BufWriter::new(file);
        match self.format {
            SnapshotFormat::Png => encode_png(framebuffer, &mut out)?,
            SnapshotFormat::Raw => out
                .write_all(framebuffer.as_bytes())
                .map_err(AppError::io(&path))?,
        }
        out.flush().map_err(AppError::io(&path))?;
        Ok(path)
    }
}

/// Encode the framebuffer as an 8-bit RGB PNG.
pub fn encode_png<W: Write>(framebuffer: &Framebuffer, out: W) -> Result<(), AppError> {
    let (width, height) = framebuffer.dimensions();
    let mut encoder = png::Encoder::new(out, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&framebuffer.to_rgb8())?;
    writer.finish()?;
    Ok(())
}
