//! Raster output and view projection.
//!
//! [`PixelSurface`] is the only way the renderer touches pixels, so the same
//! drawing code runs against the in-memory [`Framebuffer`] here or a real
//! display driver elsewhere. [`OrbitCamera`] maps world points onto it.

pub mod camera;
pub mod framebuffer;
pub mod surface;

pub use camera::OrbitCamera;
pub use framebuffer::Framebuffer;
pub use surface::PixelSurface;

/// Reference display width in pixels.
pub const DISPLAY_WIDTH: u32 = 320;
/// Reference display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 240;
