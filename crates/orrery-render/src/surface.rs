//! The pixel sink every drawing routine writes through.

use orrery_shade::Rgb565;

/// A fixed-size, single-buffered RGB565 display.
///
/// Only [`draw_pixel`](Self::draw_pixel) is required. Writes outside
/// `[0, width) x [0, height)` are ignored, and the provided rectangle and
/// disc fills clip the same way, so callers never need to pre-clip.
pub trait PixelSurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Set one pixel. Out-of-bounds coordinates are ignored.
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565);

    /// Returns `true` if `(x, y)` lies on the surface.
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width() as i64 && (y as i64) < self.height() as i64
    }

    /// Fill the axis-aligned rectangle with top-left `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb565) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(self.width() as i32);
        let y1 = y.saturating_add(height).min(self.height() as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.draw_pixel(px, py, color);
            }
        }
    }

    /// Fill the disc of radius `radius` centred at `(cx, cy)`.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb565) {
        if radius < 0 {
            return;
        }
        let r2 = radius as i64 * radius as i64;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if (dx as i64 * dx as i64 + dy as i64 * dy as i64) <= r2 {
                    self.draw_pixel(cx.saturating_add(dx), cy.saturating_add(dy), color);
                }
            }
        }
    }

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb565) {
        self.fill_rect(0, 0, self.width() as i32, self.height() as i32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every accepted write, to check the provided methods.
    struct Recorder {
        w: u32,
        h: u32,
        writes: Vec<(i32, i32, Rgb565)>,
    }

    impl PixelSurface for Recorder {
        fn width(&self) -> u32 {
            self.w
        }
        fn height(&self) -> u32 {
            self.h
        }
        fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
            if self.contains(x, y) {
                self.writes.push((x, y, color));
            }
        }
    }

    fn recorder(w: u32, h: u32) -> Recorder {
        Recorder { w, h, writes: Vec::new() }
    }

    #[test]
    fn test_contains_bounds() {
        let s = recorder(10, 5);
        assert!(s.contains(0, 0));
        assert!(s.contains(9, 4));
        assert!(!s.contains(10, 0));
        assert!(!s.contains(0, 5));
        assert!(!s.contains(-1, 2));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut s = recorder(10, 10);
        s.fill_rect(-2, 8, 5, 5, Rgb565::WHITE);
        // Visible part: x in [0, 3), y in [8, 10).
        assert_eq!(s.writes.len(), 6);
        assert!(s.writes.iter().all(|&(x, y, _)| (0..3).contains(&x) && (8..10).contains(&y)));
    }

    #[test]
    fn test_fill_circle_pixel_count() {
        let mut s = recorder(100, 100);
        s.fill_circle(50, 50, 2, Rgb565::RED);
        // Lattice points with dx² + dy² <= 4.
        assert_eq!(s.writes.len(), 13);
    }

    #[test]
    fn test_fill_circle_negative_radius_draws_nothing() {
        let mut s = recorder(10, 10);
        s.fill_circle(5, 5, -1, Rgb565::RED);
        assert!(s.writes.is_empty());
    }

    #[test]
    fn test_clear_covers_everything() {
        let mut s = recorder(4, 3);
        s.clear(Rgb565::BLUE);
        assert_eq!(s.writes.len(), 12);
    }
}
