//! Hashed lattice noise and its smoothed / interpolated variants.

/// Coordinates are scaled by this before being truncated to lattice integers.
const COORD_SCALE: f32 = 1000.0;

/// Hash a coordinate pair to a pseudo-random value in `[0, 1]`.
///
/// Both coordinates are scaled by 1000 and truncated toward zero, combined as
/// `ix + iy * 57`, then run through the classic integer mixer
/// `n * (n² * 15731 + 789221) + 1376312589`. All integer arithmetic wraps.
pub fn noise(x: f32, y: f32) -> f32 {
    let ix = (x * COORD_SCALE) as i32;
    let iy = (y * COORD_SCALE) as i32;

    let mut n = ix.wrapping_add(iy.wrapping_mul(57));
    n = (n << 13) ^ n;

    let mixed = n
        .wrapping_mul(
            n.wrapping_mul(n)
                .wrapping_mul(15_731)
                .wrapping_add(789_221),
        )
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;

    // mixed / 2^30 lies in [0, 2), so this lies in (-1, 1].
    let signed = 1.0 - mixed as f32 / 1_073_741_824.0;
    signed * 0.5 + 0.5
}

/// 3x3 box-filtered [`noise`]: corners weigh 1/16, edges 1/8, centre 1/4.
pub fn smooth_noise(x: f32, y: f32) -> f32 {
    let corners =
        (noise(x - 1.0, y - 1.0) + noise(x + 1.0, y - 1.0) + noise(x - 1.0, y + 1.0)
            + noise(x + 1.0, y + 1.0))
            / 16.0;
    let sides = (noise(x - 1.0, y) + noise(x + 1.0, y) + noise(x, y - 1.0) + noise(x, y + 1.0))
        / 8.0;
    let center = noise(x, y) / 4.0;
    corners + sides + center
}

/// Bilinear interpolation of [`smooth_noise`] between the four integer lattice
/// points surrounding `(x, y)`.
pub fn interpolated_noise(x: f32, y: f32) -> f32 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let v00 = smooth_noise(x0, y0);
    let v10 = smooth_noise(x0 + 1.0, y0);
    let v01 = smooth_noise(x0, y0 + 1.0);
    let v11 = smooth_noise(x0 + 1.0, y0 + 1.0);

    let top = v00 * (1.0 - fx) + v10 * fx;
    let bottom = v01 * (1.0 - fx) + v11 * fx;

    top * (1.0 - fy) + bottom * fy
}
