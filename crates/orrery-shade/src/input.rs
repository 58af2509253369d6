//! Per-pixel shader input.

use orrery_math::Vec3;

/// Surface sample handed to a shader.
///
/// Built once per pixel and dropped immediately after shading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderInput {
    /// Point on the unit sphere, in the body's local frame.
    pub position: Vec3,
    /// Unit surface normal at `position`.
    pub normal: Vec3,
    /// Accumulated simulated seconds.
    pub time: f32,
}

impl ShaderInput {
    /// Input for a point on a sphere centred at the origin, where the normal
    /// is the normalized position.
    pub fn on_unit_sphere(position: Vec3, time: f32) -> Self {
        Self {
            position,
            normal: orrery_math::normalize(position),
            time,
        }
    }
}
