//! A single orbiting body and its disc rasterizer.

use glam::Vec3;
use orrery_math::wrap_angle;
use orrery_render::PixelSurface;
use orrery_shade::{Rgb565, ShaderInput, ShaderKind, shade};
use serde::{Deserialize, Serialize};

/// Longest stored name, in characters. Longer names are truncated.
pub const MAX_NAME_LENGTH: usize = 19;

/// Largest disc [`CelestialBody::render_with_shader`] rasterizes, in pixels.
pub const MAX_DISC_RADIUS: i32 = 100;

/// What role a body plays in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Sun,
    Planet,
    Moon,
}

/// Handle to a body inside a [`SolarSystem`](crate::SolarSystem).
///
/// Handles are insertion indices and stay valid for the lifetime of the
/// system, since bodies are never removed or reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    /// Insertion index of the body.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a body was drawn: centre and radius in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenDisc {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl ScreenDisc {
    /// Off-screen placeholder, so the first erase pass touches nothing.
    pub const OFF_SCREEN: ScreenDisc = ScreenDisc {
        x: -1000,
        y: -1000,
        radius: 0,
    };
}

/// A sun, planet or moon.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub kind: BodyKind,
    /// World radius. Also drives the on-screen disc size.
    pub radius: f32,
    pub mass: f32,
    /// Flat color, used by the plain path and when `shader` is `None`.
    pub base_color: Rgb565,
    pub position: Vec3,
    /// Self-rotation, wrapped to `[0, 2π)`.
    pub rotation_angle: f32,
    pub rotation_speed: f32,
    /// Distance from the orbit centre. Zero pins the body in place.
    pub orbit_radius: f32,
    /// Wrapped to `[0, 2π)`.
    pub orbit_angle: f32,
    pub orbit_speed: f32,
    /// Inclination lifting the vertical component of the orbit.
    pub orbit_tilt: f32,
    pub shader: Option<ShaderKind>,
    pub(crate) parent: Option<BodyId>,
    pub screen: ScreenDisc,
    pub prev_screen: ScreenDisc,
    pub distance_to_camera: f32,
    pub visible: bool,
}

impl CelestialBody {
    /// A unit-sized, white, stationary body using the Mercury shader.
    pub fn new(name: &str, kind: BodyKind) -> Self {
        Self {
            name: name.chars().take(MAX_NAME_LENGTH).collect(),
            kind,
            radius: 1.0,
            mass: 1.0,
            base_color: Rgb565::WHITE,
            position: Vec3::ZERO,
            rotation_angle: 0.0,
            rotation_speed: 0.0,
            orbit_radius: 0.0,
            orbit_angle: 0.0,
            orbit_speed: 0.0,
            orbit_tilt: 0.0,
            shader: Some(ShaderKind::default()),
            parent: None,
            screen: ScreenDisc::default(),
            prev_screen: ScreenDisc::OFF_SCREEN,
            distance_to_camera: 0.0,
            visible: true,
        }
    }

    pub fn with_visuals(mut self, radius: f32, base_color: Rgb565) -> Self {
        self.radius = radius;
        self.base_color = base_color;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Circular orbit around the parent (or the origin).
    pub fn with_orbit(mut self, radius: f32, speed: f32, tilt: f32) -> Self {
        self.orbit_radius = radius;
        self.orbit_speed = speed;
        self.orbit_tilt = tilt;
        self
    }

    pub fn with_rotation(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_shader(mut self, shader: Option<ShaderKind>) -> Self {
        self.shader = shader;
        self
    }

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    /// Offset from the orbit centre at the current `orbit_angle`.
    pub fn orbit_offset(&self) -> Vec3 {
        let (sin, cos) = self.orbit_angle.sin_cos();
        Vec3::new(
            self.orbit_radius * cos,
            self.orbit_radius * self.orbit_tilt.sin() * sin,
            self.orbit_radius * sin,
        )
    }

    /// Advance the orbit and self-rotation by `dt` seconds.
    ///
    /// `parent_position` must already reflect this tick.
    pub fn update(&mut self, dt: f32, parent_position: Option<Vec3>) {
        self.orbit_angle = wrap_angle(self.orbit_angle + self.orbit_speed * dt);

        if self.orbit_radius > 0.0 {
            let offset = self.orbit_offset();
            self.position = match parent_position {
                Some(centre) => centre + offset,
                None => offset,
            };
        }

        self.rotation_angle = wrap_angle(self.rotation_angle + self.rotation_speed * dt);
    }

    /// Rasterize the current screen disc, one shader call per covered pixel.
    pub fn render_with_shader<S>(&self, surface: &mut S, time: f32)
    where
        S: PixelSurface + ?Sized,
    {
        let r = self.screen.radius.min(MAX_DISC_RADIUS);
        if !self.visible || r <= 0 {
            return;
        }
        let r2 = r * r;
        let inv_r = 1.0 / r as f32;

        for dy in -r..=r {
            for dx in -r..=r {
                let d2 = dx * dx + dy * dy;
                if d2 > r2 {
                    continue;
                }
                let px = self.screen.x.saturating_add(dx);
                let py = self.screen.y.saturating_add(dy);
                if !surface.contains(px, py) {
                    continue;
                }
                let z = ((r2 - d2) as f32).sqrt() * inv_r;
                let local = Vec3::new(dx as f32 * inv_r, dy as f32 * inv_r, z);
                let color = match self.shader {
                    Some(kind) => shade(kind, &ShaderInput::on_unit_sphere(local, time)),
                    None => self.base_color,
                };
                surface.draw_pixel(px, py, color);
            }
        }
    }

    /// Flat-color redraw: erase the previous footprint, fill the new one.
    pub fn render<S>(&mut self, surface: &mut S, background: Rgb565)
    where
        S: PixelSurface + ?Sized,
    {
        if !self.visible || self.kind == BodyKind::Sun {
            return;
        }

        let prev = self.prev_screen;
        if self.kind != BodyKind::Moon && surface.contains(prev.x, prev.y) {
            surface.fill_circle(prev.x, prev.y, prev.radius.saturating_add(2), background);
        }

        surface.fill_circle(self.screen.x, self.screen.y, self.screen.radius, self.base_color);
        self.prev_screen = self.screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_math::TWO_PI;
    use orrery_render::Framebuffer;

    fn planet() -> CelestialBody {
        CelestialBody::new("Test", BodyKind::Planet).with_visuals(10.0, Rgb565::RED)
    }

    #[test]
    fn test_new_defaults() {
        let body = CelestialBody::new("Body", BodyKind::Moon);
        assert_eq!(body.radius, 1.0);
        assert_eq!(body.shader, Some(ShaderKind::Mercury));
        assert_eq!(body.prev_screen, ScreenDisc::OFF_SCREEN);
        assert!(body.parent().is_none());
        assert!(body.visible);
    }

    #[test]
    fn test_name_truncated() {
        let body = CelestialBody::new("An Unreasonably Long Planet Name", BodyKind::Planet);
        assert_eq!(body.name.chars().count(), MAX_NAME_LENGTH);
        assert!(body.name.starts_with("An Unreasonably"));
    }

    #[test]
    fn test_orbit_quarter_turn() {
        let mut body = planet().with_orbit(50.0, 1.0, 0.0);
        body.update(std::f32::consts::FRAC_PI_2, None);
        assert!(body.position.x.abs() < 1e-3, "{:?}", body.position);
        assert!((body.position.z - 50.0).abs() < 1e-3, "{:?}", body.position);
        assert_eq!(body.position.y, 0.0);
    }

    #[test]
    fn test_tilt_lifts_orbit() {
        let mut body = planet().with_orbit(50.0, 1.0, 0.5);
        body.update(std::f32::consts::FRAC_PI_2, None);
        assert!((body.position.y - 50.0 * 0.5f32.sin()).abs() < 1e-3);
    }

    #[test]
    fn test_parent_offset_added() {
        let mut moon = CelestialBody::new("Moon", BodyKind::Moon).with_orbit(10.0, 0.0, 0.0);
        moon.update(1.0, Some(Vec3::new(100.0, 5.0, -3.0)));
        assert_eq!(moon.position, Vec3::new(110.0, 5.0, -3.0));
    }

    #[test]
    fn test_zero_orbit_keeps_position() {
        let start = Vec3::new(3.0, 4.0, 5.0);
        let mut body = planet().with_position(start).with_orbit(0.0, 2.0, 0.0);
        for _ in 0..10 {
            body.update(0.7, Some(Vec3::splat(99.0)));
        }
        assert_eq!(body.position, start);
        // The angle still advances.
        assert!(body.orbit_angle > 0.0);
    }

    #[test]
    fn test_angles_wrap() {
        let mut body = planet().with_orbit(20.0, 3.0, 0.0).with_rotation(5.0);
        for _ in 0..500 {
            body.update(0.1, None);
            assert!((0.0..TWO_PI).contains(&body.orbit_angle));
            assert!((0.0..TWO_PI).contains(&body.rotation_angle));
        }
    }

    #[test]
    fn test_shaded_disc_covers_expected_pixels() {
        let mut fb = Framebuffer::new(64, 64);
        let mut body = planet().with_shader(None);
        body.screen = ScreenDisc { x: 32, y: 32, radius: 5 };
        body.render_with_shader(&mut fb, 0.0);

        let mut expected = 0;
        for dy in -5i32..=5 {
            for dx in -5i32..=5 {
                if dx * dx + dy * dy <= 25 {
                    expected += 1;
                }
            }
        }
        assert_eq!(fb.count_color(Rgb565::RED), expected);
        assert_eq!(fb.pixel(32, 27), Some(Rgb565::RED));
        assert_eq!(fb.pixel(36, 36), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_shaded_disc_clips_at_edges() {
        let mut fb = Framebuffer::new(16, 16);
        let mut body = planet().with_shader(Some(ShaderKind::Neptune));
        body.screen = ScreenDisc { x: 0, y: 0, radius: 8 };
        body.render_with_shader(&mut fb, 1.0);
        assert_ne!(fb.pixel(0, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_oversized_radius_clamped() {
        let mut fb = Framebuffer::new(400, 400);
        let mut body = planet().with_shader(None);
        body.screen = ScreenDisc { x: 200, y: 200, radius: 50_000 };
        body.render_with_shader(&mut fb, 0.0);
        assert_eq!(fb.pixel(200, 100), Some(Rgb565::RED));
        assert_eq!(fb.pixel(200, 99), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_invisible_or_empty_draws_nothing() {
        let mut fb = Framebuffer::new(32, 32);
        let mut body = planet().with_shader(None);
        body.screen = ScreenDisc { x: 16, y: 16, radius: 0 };
        body.render_with_shader(&mut fb, 0.0);
        body.screen.radius = 6;
        body.visible = false;
        body.render_with_shader(&mut fb, 0.0);
        assert_eq!(fb.count_color(Rgb565::BLACK), 32 * 32);
    }

    #[test]
    fn test_plain_render_erases_previous() {
        let mut fb = Framebuffer::new(64, 64);
        let mut body = planet();
        body.screen = ScreenDisc { x: 15, y: 15, radius: 4 };
        body.render(&mut fb, Rgb565::BLACK);
        assert_eq!(fb.pixel(15, 15), Some(Rgb565::RED));
        assert_eq!(body.prev_screen, body.screen);

        body.screen = ScreenDisc { x: 45, y: 45, radius: 4 };
        body.render(&mut fb, Rgb565::BLACK);
        assert_eq!(fb.pixel(15, 15), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(45, 45), Some(Rgb565::RED));
    }

    #[test]
    fn test_plain_render_moon_leaves_trail() {
        let mut fb = Framebuffer::new(64, 64);
        let mut moon = CelestialBody::new("Moon", BodyKind::Moon).with_visuals(3.0, Rgb565::GREEN);
        moon.screen = ScreenDisc { x: 10, y: 10, radius: 2 };
        moon.render(&mut fb, Rgb565::BLACK);
        moon.screen = ScreenDisc { x: 40, y: 40, radius: 2 };
        moon.render(&mut fb, Rgb565::BLACK);
        assert_eq!(fb.pixel(10, 10), Some(Rgb565::GREEN));
    }

    #[test]
    fn test_plain_render_skips_sun() {
        let mut fb = Framebuffer::new(32, 32);
        let mut sun = CelestialBody::new("Sun", BodyKind::Sun).with_visuals(5.0, Rgb565::WHITE);
        sun.screen = ScreenDisc { x: 16, y: 16, radius: 5 };
        sun.render(&mut fb, Rgb565::BLACK);
        assert_eq!(fb.count_color(Rgb565::BLACK), 32 * 32);
        assert_eq!(sun.prev_screen, ScreenDisc::OFF_SCREEN);
    }
}
