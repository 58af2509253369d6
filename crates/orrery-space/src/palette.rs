//! Fixed colors used by the scene.

use orrery_shade::Rgb565;

/// Background of empty space.
pub const COLOR_SPACE: Rgb565 = Rgb565::BLACK;
/// Flat color of the default planet.
pub const COLOR_EARTH: Rgb565 = Rgb565(0x2B1F);
/// Flat color of the sun.
pub const COLOR_SUN: Rgb565 = Rgb565(0xFFE0);
/// Flat color of small rocky moons.
pub const COLOR_MOON: Rgb565 = Rgb565(0xBDF7);
/// Orbit path dots.
pub const COLOR_ORBIT: Rgb565 = Rgb565(0x632C);
