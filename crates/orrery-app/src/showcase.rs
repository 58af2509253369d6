//! The interactive shader showcase: one planet, one button, a small HUD.

use orrery_config::Config;
use orrery_render::{OrbitCamera, PixelSurface};
use orrery_shade::{Rgb565, ShaderKind};
use orrery_space::palette::COLOR_SPACE;
use orrery_space::{SolarSystem, draw_stars};
use tracing::{debug, info};

use crate::clock::{FpsCounter, FrameTimer};
use crate::input::{Debouncer, ShaderButton};

/// Height of the HUD bar across the top of the screen.
pub const HUD_HEIGHT: i32 = 30;
/// Indicator disc color while the button is up.
pub const INDICATOR_IDLE: Rgb565 = Rgb565(0x2104);

const SWATCH_RECT: (i32, i32, i32, i32) = (5, 5, 150, 20);
const INDICATOR_CENTRE: (i32, i32) = (170, 15);
const INDICATOR_RADIUS: i32 = 10;
const FLASH_RADIUS: i32 = 30;

/// Camera, bodies and UI state for the showcase loop.
pub struct Showcase {
    camera: OrbitCamera,
    system: SolarSystem,
    current_shader: ShaderKind,
    needs_redraw: bool,
    button_down: bool,
    timer: FrameTimer,
    fps: FpsCounter,
    debouncer: Debouncer,
    star_seed: u64,
    star_count: u32,
    show_orbits: bool,
    show_fps: bool,
}

impl Showcase {
    /// Build camera and system from `config`, with `now_ms` as the start tick.
    pub fn new(config: &Config, now_ms: u64) -> Self {
        let display = &config.display;
        let mut camera = OrbitCamera::new(
            config.camera.field_of_view,
            display.width as f32 / display.height.max(1) as f32,
        );
        camera.distance = config.camera.distance;
        camera.height = config.camera.height;
        camera.orbit_speed = config.camera.orbit_speed;
        camera.angle = 0.0;

        let sim = &config.simulation;
        let mut system = SolarSystem::with_preset(sim.scene);
        system.time_scale = sim.time_scale;
        system.set_planet_shader(sim.initial_shader);

        info!(
            "Showcase {}x{}, scene {:?}, {} bodies, shader {}",
            config.display.width,
            config.display.height,
            sim.scene,
            system.len(),
            sim.initial_shader.name()
        );

        Self {
            camera,
            system,
            current_shader: sim.initial_shader,
            needs_redraw: false,
            button_down: false,
            timer: FrameTimer::new(now_ms, sim.min_dt, sim.max_dt),
            fps: FpsCounter::new(now_ms),
            debouncer: Debouncer::new(config.showcase.debounce_ms, now_ms),
            star_seed: sim.star_seed,
            star_count: sim.star_count,
            show_orbits: config.showcase.show_orbits,
            show_fps: config.debug.show_fps,
        }
    }

    /// Paint the empty sky.
    pub fn init<S>(&mut self, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        self.camera
            .set_aspect_ratio(surface.width() as f32, surface.height() as f32);
        self.draw_background(surface);
        self.needs_redraw = false;
    }

    /// Advance one frame of simulation. Returns the clamped `dt` in seconds.
    pub fn update<S, B>(&mut self, now_ms: u64, button: &B, surface: &mut S) -> f32
    where
        S: PixelSurface + ?Sized,
        B: ShaderButton + ?Sized,
    {
        let dt = self.timer.tick(now_ms);

        self.process_input(now_ms, button, surface);

        self.camera.update(dt);
        self.system.update(dt);

        if let Some(fps) = self.fps.frame(now_ms)
            && self.show_fps
        {
            info!("FPS: {fps:.1}");
        }
        dt
    }

    fn process_input<S, B>(&mut self, now_ms: u64, button: &B, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
        B: ShaderButton + ?Sized,
    {
        let pressed = button.is_pressed();
        self.button_down = pressed;
        if !self.debouncer.update(pressed, now_ms) {
            return;
        }

        let (cx, cy) = centre(surface);
        surface.fill_circle(cx, cy, FLASH_RADIUS, Rgb565::WHITE);

        self.current_shader = self.current_shader.next();
        self.system.set_planet_shader(self.current_shader);
        self.needs_redraw = true;
        debug!("Shader switched to {}", self.current_shader.name());
    }

    /// Redraw the scene and the HUD.
    pub fn render<S>(&mut self, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        if self.needs_redraw {
            self.draw_background(surface);
            self.needs_redraw = false;
        }

        if self.show_orbits {
            self.system.render_orbits(&self.camera, surface);
        }
        let time = self.system.total_time();
        self.system.render_with_shaders(&self.camera, time, surface);

        self.draw_hud(surface);
    }

    fn draw_background<S>(&self, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        surface.clear(COLOR_SPACE);
        draw_stars(surface, self.star_seed, self.star_count);
    }

    fn draw_hud<S>(&self, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        surface.fill_rect(0, 0, surface.width() as i32, HUD_HEIGHT, Rgb565::BLACK);

        let (x, y, w, h) = SWATCH_RECT;
        surface.fill_rect(x, y, w, h, self.current_shader.swatch());

        let indicator = if self.button_down {
            Rgb565::GREEN
        } else {
            INDICATOR_IDLE
        };
        let (ix, iy) = INDICATOR_CENTRE;
        surface.fill_circle(ix, iy, INDICATOR_RADIUS, indicator);
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn current_shader(&self) -> ShaderKind {
        self.current_shader
    }

    /// Whether the next [`render`](Self::render) repaints the background.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }
}

fn centre<S>(surface: &S) -> (i32, i32)
where
    S: PixelSurface + ?Sized,
{
    (surface.width() as i32 / 2, surface.height() as i32 / 2)
}
