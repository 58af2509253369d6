//! Seeded star backdrop.

use orrery_render::PixelSurface;
use orrery_shade::Rgb565;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Dimmest star gray level.
const MIN_BRIGHTNESS: f32 = 60.0;

/// Scatter `count` single-pixel gray stars over the surface.
///
/// Deterministic for a given seed and surface size.
pub fn draw_stars<S>(surface: &mut S, seed: u64, count: u32)
where
    S: PixelSurface + ?Sized,
{
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..count {
        let x = rng.random_range(0..width) as i32;
        let y = rng.random_range(0..height) as i32;

        // Power-law: many dim, few bright.
        let raw: f32 = rng.random();
        let level = (MIN_BRIGHTNESS + raw.powf(4.0) * (255.0 - MIN_BRIGHTNESS)) as u8;

        surface.draw_pixel(x, y, Rgb565::from_rgb8(level, level, level));
    }
}
