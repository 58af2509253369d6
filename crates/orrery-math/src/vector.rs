//! 2- and 3-component `f32` vectors.
//!
//! The types are plain `glam` vectors; the free functions exist so call sites
//! read the same as the shading formulas they implement.

pub use glam::{Vec2, Vec3};

/// Construct a [`Vec3`].
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Construct a [`Vec2`].
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Component-wise sum.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Dot product: x₁x₂ + y₁y₂ + z₁z₂.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Unit-length copy of `v`.
///
/// A zero-length (or non-finite length) input returns [`Vec3::ZERO`] instead
/// of dividing by zero.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}
