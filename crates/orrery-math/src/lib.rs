//! Vector value types and the handful of vector/angle operations every other
//! Orrery crate builds on.

mod angle;
mod vector;

pub use angle::{TWO_PI, wrap_angle};
pub use vector::{Vec2, Vec3, add, distance, dot, normalize, vec2, vec3};
