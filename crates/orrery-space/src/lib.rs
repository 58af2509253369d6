//! Celestial bodies, the solar system that owns them, and the star backdrop.
//!
//! Per tick the [`SolarSystem`] advances every body's orbit, sorts them back to
//! front relative to the camera, and rasterizes each one as a shaded disc.

pub mod body;
pub mod palette;
pub mod starfield;
pub mod system;

pub use body::{BodyId, BodyKind, CelestialBody, ScreenDisc};
pub use starfield::draw_stars;
pub use system::{MAX_BODIES, ScenePreset, SolarSystem};
