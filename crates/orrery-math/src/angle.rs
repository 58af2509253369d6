//! Angle wrapping for orbit and spin phases.

/// One full turn in radians.
pub const TWO_PI: f32 = std::f32::consts::TAU;

/// Wrap `angle` into `[0, 2π)`.
///
/// Uses the Euclidean remainder, so negative angles and steps larger than a
/// full turn land in range too. `f32` rounding can push a tiny negative input
/// up to exactly `2π`; that case folds back to `0.0`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TWO_PI);
    if wrapped >= TWO_PI { 0.0 } else { wrapped }
}
