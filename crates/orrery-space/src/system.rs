//! The solar system: a fixed-capacity arena of bodies plus the per-frame
//! painter's-algorithm pipeline that draws them.

use std::str::FromStr;

use glam::Vec3;
use orrery_math::{TWO_PI, distance};
use orrery_render::{OrbitCamera, PixelSurface};
use orrery_shade::{Rgb565, ShaderKind};
use serde::{Deserialize, Serialize};

use crate::body::{BodyId, BodyKind, CelestialBody, MAX_DISC_RADIUS, ScreenDisc};
use crate::palette::{COLOR_EARTH, COLOR_MOON, COLOR_ORBIT, COLOR_SPACE, COLOR_SUN};

/// Maximum number of bodies a system holds.
pub const MAX_BODIES: usize = 15;

/// World radius to screen radius factor.
const SCREEN_RADIUS_SCALE: f32 = 1.2;
const MIN_SCREEN_RADIUS: i32 = 2;

/// Samples along one orbit path.
const ORBIT_SEGMENTS: usize = 100;

/// Which body set a system starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePreset {
    /// One large planet at the origin, the shader showcase.
    #[default]
    Showcase,
    /// A sun, three orbiting planets and a moon.
    Orrery,
}

impl FromStr for ScenePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "showcase" => Ok(ScenePreset::Showcase),
            "orrery" => Ok(ScenePreset::Orrery),
            _ => Err(format!("unknown scene {s:?}")),
        }
    }
}

/// Owns every body, the simulation clock and the back-to-front draw order.
#[derive(Clone, Debug)]
pub struct SolarSystem {
    bodies: Vec<CelestialBody>,
    draw_order: Vec<BodyId>,
    /// Multiplier applied to every `dt` passed to [`update`](Self::update).
    pub time_scale: f32,
    total_time: f32,
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarSystem {
    /// A system seeded with the [`ScenePreset::Showcase`] body set.
    pub fn new() -> Self {
        Self::with_preset(ScenePreset::Showcase)
    }

    /// A system with no bodies.
    pub fn empty() -> Self {
        Self {
            bodies: Vec::with_capacity(MAX_BODIES),
            draw_order: Vec::with_capacity(MAX_BODIES),
            time_scale: 1.0,
            total_time: 0.0,
        }
    }

    pub fn with_preset(preset: ScenePreset) -> Self {
        let mut system = Self::empty();
        match preset {
            ScenePreset::Showcase => system.seed_showcase(),
            ScenePreset::Orrery => system.seed_orrery(),
        }
        log::debug!("Seeded {preset:?} scene with {} bodies", system.len());
        system
    }

    fn seed_showcase(&mut self) {
        self.add_body(
            CelestialBody::new("Planet", BodyKind::Planet)
                .with_visuals(60.0, COLOR_EARTH)
                .with_rotation(0.2)
                .with_shader(Some(ShaderKind::Mercury)),
        );
    }

    fn seed_orrery(&mut self) {
        // The interactive planet goes first so the shader button drives it.
        let home = self.add_body(
            CelestialBody::new("Planet", BodyKind::Planet)
                .with_visuals(14.0, COLOR_EARTH)
                .with_orbit(120.0, 0.25, 0.08)
                .with_rotation(0.2)
                .with_shader(Some(ShaderKind::Mercury)),
        );
        self.add_body(
            CelestialBody::new("Sun", BodyKind::Sun)
                .with_visuals(18.0, COLOR_SUN)
                .with_mass(1000.0)
                .with_shader(None),
        );
        self.add_body(
            CelestialBody::new("Inner", BodyKind::Planet)
                .with_visuals(6.0, Rgb565(0xFD40))
                .with_orbit(45.0, 0.8, 0.05)
                .with_rotation(0.4)
                .with_shader(Some(ShaderKind::Venus)),
        );
        self.add_body(
            CelestialBody::new("Blue", BodyKind::Planet)
                .with_visuals(9.0, Rgb565(0x047F))
                .with_orbit(75.0, 0.5, 0.1)
                .with_rotation(0.3)
                .with_shader(Some(ShaderKind::Neptune)),
        );
        if let Some(home) = home {
            self.add_body(
                CelestialBody::new("Moon", BodyKind::Moon)
                    .with_visuals(3.0, COLOR_MOON)
                    .with_orbit(20.0, 2.0, 0.0)
                    .with_parent(home)
                    .with_shader(Some(ShaderKind::Mercury)),
            );
        }
    }

    /// Append a body. Returns `None` without changing anything when the
    /// system is full or the body's parent does not exist yet.
    pub fn add_body(&mut self, body: CelestialBody) -> Option<BodyId> {
        if self.bodies.len() >= MAX_BODIES {
            log::debug!("Body limit reached, ignoring {:?}", body.name);
            return None;
        }
        if let Some(parent) = body.parent() {
            if parent.0 >= self.bodies.len() {
                log::warn!("Body {:?} names unknown parent {}", body.name, parent.0);
                return None;
            }
        }
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        Some(id)
    }

    /// Advance every body by `dt · time_scale`, parents before children.
    pub fn update(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.total_time += scaled;
        for i in 0..self.bodies.len() {
            let parent_position = self.resolve_parent(i);
            self.bodies[i].update(scaled, parent_position);
        }
    }

    /// Position of body `i`'s parent, which must precede it. A handle that
    /// breaks that order (set through a `_mut` accessor) is dropped.
    fn resolve_parent(&mut self, i: usize) -> Option<Vec3> {
        let parent = self.bodies[i].parent()?;
        if parent.0 < i {
            return Some(self.bodies[parent.0].position);
        }
        let body = &mut self.bodies[i];
        log::warn!(
            "Body {:?} names invalid parent {}, detaching it",
            body.name,
            parent.0
        );
        body.parent = None;
        None
    }

    /// Refresh `distance_to_camera` and rebuild the far-to-near draw order.
    /// Equal distances keep insertion order.
    pub fn sort_by_distance(&mut self, camera: &OrbitCamera) {
        let eye = camera.position();
        for body in &mut self.bodies {
            body.distance_to_camera = distance(eye, body.position);
        }

        let bodies = &self.bodies;
        self.draw_order.clear();
        self.draw_order.extend((0..bodies.len()).map(BodyId));
        self.draw_order.sort_by(|a, b| {
            bodies[b.0]
                .distance_to_camera
                .total_cmp(&bodies[a.0].distance_to_camera)
        });
    }

    /// Sort, project and rasterize every body with its shader.
    pub fn render_with_shaders<S>(&mut self, camera: &OrbitCamera, time: f32, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        self.sort_by_distance(camera);
        let (width, height) = (surface.width(), surface.height());
        for &id in &self.draw_order {
            let body = &mut self.bodies[id.0];
            project(body, camera, width, height);
            body.render_with_shader(surface, time);
        }
    }

    /// Same pipeline as [`render_with_shaders`](Self::render_with_shaders),
    /// drawing flat discs and erasing each body's previous footprint.
    pub fn render<S>(&mut self, camera: &OrbitCamera, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        self.sort_by_distance(camera);
        let (width, height) = (surface.width(), surface.height());
        for &id in &self.draw_order {
            let body = &mut self.bodies[id.0];
            project(body, camera, width, height);
            body.render(surface, COLOR_SPACE);
        }
    }

    /// Dot the orbit circle of every planet in the `y = 0` plane.
    pub fn render_orbits<S>(&self, camera: &OrbitCamera, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        let (width, height) = (surface.width(), surface.height());
        for body in &self.bodies {
            if body.kind != BodyKind::Planet || body.orbit_radius < 1.0 {
                continue;
            }
            for i in 0..ORBIT_SEGMENTS {
                let angle = i as f32 * TWO_PI / ORBIT_SEGMENTS as f32;
                let (sin, cos) = angle.sin_cos();
                let point = Vec3::new(body.orbit_radius * cos, 0.0, body.orbit_radius * sin);
                let screen = camera.world_to_screen(point, width, height);
                let (x, y) = (screen.x as i32, screen.y as i32);
                surface.draw_pixel(x, y, COLOR_ORBIT);
                surface.draw_pixel(x.saturating_add(1), y, COLOR_ORBIT);
            }
        }
    }

    pub fn get_body_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn get_body_by_name_mut(&mut self, name: &str) -> Option<&mut CelestialBody> {
        self.bodies.iter_mut().find(|b| b.name == name)
    }

    pub fn get_body_by_index(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    pub fn get_body_by_index_mut(&mut self, index: usize) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(index)
    }

    pub fn body(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    /// Switch the shader of the first inserted body. No-op when empty.
    pub fn set_planet_shader(&mut self, kind: ShaderKind) {
        if let Some(first) = self.bodies.first_mut() {
            first.shader = Some(kind);
        }
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Bodies far to near, as of the last [`sort_by_distance`](Self::sort_by_distance).
    pub fn draw_order(&self) -> impl Iterator<Item = &CelestialBody> + '_ {
        self.draw_order.iter().map(|id| &self.bodies[id.0])
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Accumulated scaled simulation time in seconds.
    pub fn total_time(&self) -> f32 {
        self.total_time
    }
}

fn project(body: &mut CelestialBody, camera: &OrbitCamera, width: u32, height: u32) {
    let screen = camera.world_to_screen(body.position, width, height);
    body.screen = ScreenDisc {
        x: screen.x as i32,
        y: screen.y as i32,
        radius: ((body.radius * SCREEN_RADIUS_SCALE) as i32)
            .clamp(MIN_SCREEN_RADIUS, MAX_DISC_RADIUS),
    };
    body.visible = true;
}
