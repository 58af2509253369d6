//! The six planet shaders and their dispatch table.
//!
//! Every shader starts from the same light term, layers FBM-derived masks on
//! top, and scales each channel by the light before packing. Channel values
//! are converted to `u8` with `as`, which truncates toward zero and saturates
//! at the ends of the range.

use orrery_math::{dot, normalize, vec3};
use orrery_noise::{fbm, smoothstep};

use crate::{Rgb565, ShaderInput, ShaderKind};

/// Signature shared by every shader in the bank.
pub type ShaderFn = fn(&ShaderInput) -> Rgb565;

/// Indexed by [`ShaderKind::index`].
const SHADER_TABLE: [ShaderFn; ShaderKind::COUNT] = [
    shade_mercury,
    shade_venus,
    shade_earth,
    shade_jupiter,
    shade_saturn,
    shade_neptune,
];

/// Look up the shader function for `kind`.
#[inline]
pub fn shader_fn(kind: ShaderKind) -> ShaderFn {
    SHADER_TABLE[kind.index()]
}

/// Shade one surface sample with the given shader.
#[inline]
pub fn shade(kind: ShaderKind, input: &ShaderInput) -> Rgb565 {
    shader_fn(kind)(input)
}

/// Lambert-style term for the fixed light at `(1, 1, 1)`, remapped from
/// `[-1, 1]` to `[0, 1]` and eased.
pub fn light_term(input: &ShaderInput) -> f32 {
    let to_light = normalize(vec3(1.0, 1.0, 1.0));
    let lambert = (dot(input.normal, to_light) + 1.0) * 0.5;
    smoothstep(0.0, 1.0, lambert)
}

#[inline]
fn channel(value: f32) -> u8 {
    value as u8
}

fn shade_mercury(input: &ShaderInput) -> Rgb565 {
    let light = light_term(input);
    let p = input.position;

    let crater = smoothstep(0.3, 0.7, fbm(p.x * 8.0, p.z * 8.0, 4));
    let detail = fbm(p.x * 20.0, p.z * 20.0, 2) * 0.1;
    let base = 0.5 + crater * 0.3 + detail;

    let gray = channel(base * light * 180.0 + 40.0);
    let g = gray as f32;
    Rgb565::from_rgb8(gray, channel(g * 0.95), channel(g * 0.9))
}

fn shade_venus(input: &ShaderInput) -> Rgb565 {
    let light = light_term(input);
    let p = input.position;
    let t = input.time;

    let upper = fbm(p.x * 4.0 + t * 0.05, p.z * 4.0, 5);
    let lower = fbm(p.x * 8.0 - t * 0.03, p.z * 8.0, 3) * 0.5;
    let clouds = smoothstep(0.3, 0.8, upper + lower);

    let yellow = (0.7 + clouds * 0.3) * light;
    Rgb565::from_rgb8(
        channel(yellow * 250.0),
        channel(yellow * 220.0),
        channel(yellow * 120.0),
    )
}

fn shade_earth(input: &ShaderInput) -> Rgb565 {
    let light = light_term(input);
    let p = input.position;

    let continents = smoothstep(0.35, 0.55, fbm(p.x * 5.0, p.z * 5.0, 5));

    let (mut r, mut g, mut b) = if continents > 0.5 {
        let green = fbm(p.x * 15.0, p.z * 15.0, 2);
        (
            channel(30.0 * light + green * 20.0),
            channel((120.0 + green * 40.0) * light),
            channel(30.0 * light),
        )
    } else {
        let depth = fbm(p.x * 12.0, p.z * 12.0, 3);
        (
            channel(10.0 * light),
            channel((80.0 + depth * 30.0) * light),
            channel((140.0 + depth * 40.0) * light),
        )
    };

    let clouds = smoothstep(0.55, 0.75, fbm(p.x * 10.0 + input.time * 0.1, p.z * 10.0, 3));
    if clouds > 0.5 {
        let alpha = (clouds - 0.5) * 2.0;
        let blend = |base: u8, white: f32| channel(base as f32 * (1.0 - alpha) + white * alpha * light);
        r = blend(r, 240.0);
        g = blend(g, 240.0);
        b = blend(b, 250.0);
    }

    Rgb565::from_rgb8(r, g, b)
}

fn shade_jupiter(input: &ShaderInput) -> Rgb565 {
    let light = light_term(input);
    let p = input.position;
    let t = input.time;

    let bands = smoothstep(0.2, 0.8, (p.y * 10.0 + t * 0.05).sin() * 0.5 + 0.5);
    let turbulence = fbm(p.x * 8.0 + t * 0.02, p.y * 3.0, 5);
    let storms = smoothstep(0.6, 0.8, fbm(p.x * 15.0, p.y * 15.0, 3)) * 0.3;

    let combined = bands * 0.6 + turbulence * 0.3 + storms;
    Rgb565::from_rgb8(
        channel((180.0 + combined * 75.0) * light),
        channel((130.0 + combined * 60.0) * light),
        channel((80.0 + combined * 40.0) * light),
    )
}

fn shade_saturn(input: &ShaderInput) -> Rgb565 {
    let light = light_term(input);
    let p = input.position;

    let bands = smoothstep(0.3, 0.7, (p.y * 8.0).sin() * 0.5 + 0.5);
    let detail = fbm(p.x * 10.0, p.y * 5.0, 4) * 0.2;

    let variation = bands + detail;
    Rgb565::from_rgb8(
        channel((220.0 + variation * 35.0) * light),
        channel((190.0 + variation * 30.0) * light),
        channel((140.0 + variation * 25.0) * light),
    )
}

fn shade_neptune(input: &ShaderInput) -> Rgb565 {
    let light = light_term(input);
    let p = input.position;
    let t = input.time;

    let energy = fbm(p.x * 6.0 + t * 0.2, p.z * 6.0 + t * 0.15, 5);
    let storms = smoothstep(0.5, 0.8, fbm(p.x * 12.0 - t * 0.1, p.y * 12.0, 4));
    let glow = smoothstep(0.3, 0.7, (t * 1.5 + energy * 6.28).sin() * 0.5 + 0.5);

    let combined = energy * 0.5 + storms * 0.3 + glow * 0.2;
    Rgb565::from_rgb8(
        channel((20.0 + combined * 80.0) * light),
        channel((80.0 + combined * 100.0) * light),
        channel((180.0 + combined * 75.0) * light),
    )
}
