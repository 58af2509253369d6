//! Fractal summation and easing.

use crate::lattice::interpolated_noise;

/// Fractal Brownian motion over [`interpolated_noise`].
///
/// Each octave doubles the frequency and halves the amplitude; the sum is
/// divided by the total amplitude so the result stays in `[0, 1]`.
/// Zero octaves yields `0.0`.
pub fn fbm(x: f32, y: f32, octaves: u32) -> f32 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        total += interpolated_noise(x * frequency, y * frequency) * amplitude;
        max_value += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    if max_value > 0.0 { total / max_value } else { 0.0 }
}

/// Cubic Hermite easing of `x` between `edge0` and `edge1`.
///
/// The normalized parameter is clamped to `[0, 1]` before shaping.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
