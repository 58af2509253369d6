//! Per-pixel planet shaders and the packed 16-bit color they produce.
//!
//! A shader turns a point on the unit sphere (plus simulated time) into an
//! [`Rgb565`] color. There are six of them, one per [`ShaderKind`], all sharing
//! the same fixed directional light and built from the `orrery-noise`
//! primitives.

mod bank;
mod color;
mod input;
mod kind;

pub use bank::{ShaderFn, light_term, shade, shader_fn};
pub use color::Rgb565;
pub use input::ShaderInput;
pub use kind::ShaderKind;
