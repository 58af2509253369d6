//! Auto-orbiting camera and world-to-screen projection.
//!
//! The eye circles the world origin at a fixed horizontal `distance` and
//! `height`, always looking at the origin with +Y up. Projection is a plain
//! pinhole model with a **vertical** field of view.

use glam::{Mat4, Vec2, Vec3};
use orrery_math::wrap_angle;

/// Default orbit rate of the eye around the origin, in radians per second.
pub const DEFAULT_ORBIT_SPEED: f32 = 0.1;

/// A viewpoint orbiting the scene origin.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal distance from the Y axis.
    pub distance: f32,
    /// Height above the orbital plane.
    pub height: f32,
    /// Current azimuth in radians, kept in `[0, 2π)` by [`update`](Self::update).
    pub angle: f32,
    /// Azimuth change per simulated second.
    pub orbit_speed: f32,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    /// Width / height.
    pub aspect_ratio: f32,
}

impl OrbitCamera {
    /// Camera with the given vertical FOV (degrees) and aspect ratio, placed
    /// at distance 200 and height 100.
    pub fn new(field_of_view: f32, aspect_ratio: f32) -> Self {
        Self {
            distance: 200.0,
            height: 100.0,
            angle: 0.0,
            orbit_speed: DEFAULT_ORBIT_SPEED,
            field_of_view,
            aspect_ratio,
        }
    }

    /// Advance the fly-around by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.angle = wrap_angle(self.angle + self.orbit_speed * dt);
    }

    /// Eye position derived from `(distance, height, angle)`.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.angle.cos(),
            self.height,
            self.distance * self.angle.sin(),
        )
    }

    /// Update the aspect ratio from a surface size.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    /// Right-handed view matrix looking from [`position`](Self::position) at
    /// the origin.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.position();
        // Straight above or below the origin, +Y is parallel to the view
        // direction and cannot serve as "up".
        let up = if self.distance.abs() <= f32::EPSILON {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(eye, Vec3::ZERO, up)
    }

    /// Returns `true` if `point` lies in front of the eye.
    pub fn is_in_front(&self, point: Vec3) -> bool {
        self.view_matrix().transform_point3(point).z < 0.0
    }

    /// Project a world point to pixel coordinates on a `width` x `height`
    /// surface, with `(0, 0)` at the top-left.
    ///
    /// Points behind the eye are not clipped and land at mirrored,
    /// meaningless coordinates; use [`is_in_front`](Self::is_in_front) to
    /// guard if that matters. A point exactly in the eye plane is nudged
    /// forward so the result stays finite.
    pub fn world_to_screen(&self, point: Vec3, width: u32, height: u32) -> Vec2 {
        let view = self.view_matrix().transform_point3(point);

        let mut depth = -view.z;
        if depth.abs() < f32::EPSILON {
            depth = f32::EPSILON;
        }

        let tan_half_fov = (self.field_of_view.to_radians() * 0.5).tan();
        let ndc_x = view.x / (depth * tan_half_fov * self.aspect_ratio);
        let ndc_y = view.y / (depth * tan_half_fov);

        Vec2::new(
            (ndc_x + 1.0) * 0.5 * width as f32,
            (1.0 - ndc_y) * 0.5 * height as f32,
        )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(60.0, crate::DISPLAY_WIDTH as f32 / crate::DISPLAY_HEIGHT as f32)
    }
}
