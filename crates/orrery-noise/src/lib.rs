//! Deterministic value noise and fractal Brownian motion.
//!
//! These are the only texture primitives the shader bank uses. Everything is a
//! pure function of its arguments: there is no seed and no hidden state, so the
//! same surface point always produces the same texel.

mod fbm;
mod lattice;

pub use fbm::{fbm, smoothstep};
pub use lattice::{interpolated_noise, noise, smooth_noise};
