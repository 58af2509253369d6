//! The "next shader" button and its debouncing.

/// A single push button.
pub trait ShaderButton {
    /// Whether the button is held down right now.
    fn is_pressed(&self) -> bool;
}

/// Accepts a press only on the released-to-pressed edge, and only when more
/// than `window_ms` have passed since the last accepted press.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u64,
    last_accepted_ms: u64,
    was_pressed: bool,
}

impl Debouncer {
    /// `now_ms` counts as the time of the last accepted press, so presses
    /// right after startup are ignored too.
    pub fn new(window_ms: u64, now_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: now_ms,
            was_pressed: false,
        }
    }

    /// Feed the current button level. Returns `true` for an accepted press.
    pub fn update(&mut self, pressed: bool, now_ms: u64) -> bool {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;

        if edge && now_ms.saturating_sub(self.last_accepted_ms) > self.window_ms {
            self.last_accepted_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// A button that presses itself every `every` frames for one frame.
#[derive(Debug, Clone, Default)]
pub struct ScriptedButton {
    every: u32,
    frame: u32,
}

impl ScriptedButton {
    /// `every == 0` never presses.
    pub fn new(every: u32) -> Self {
        Self { every, frame: 0 }
    }

    /// Tell the button which frame is about to run.
    pub fn set_frame(&mut self, frame: u32) {
        self.frame = frame;
    }
}

impl ShaderButton for ScriptedButton {
    fn is_pressed(&self) -> bool {
        self.every > 0 && self.frame > 0 && self.frame % self.every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_after_window_accepted() {
        let mut d = Debouncer::new(300, 0);
        assert!(d.update(true, 301));
    }

    #[test]
    fn test_press_inside_startup_window_ignored() {
        let mut d = Debouncer::new(300, 1000);
        assert!(!d.update(true, 1300));
    }

    #[test]
    fn test_second_press_inside_window_ignored() {
        let mut d = Debouncer::new(300, 0);
        assert!(d.update(true, 1000));
        assert!(!d.update(false, 1100));
        assert!(!d.update(true, 1200));
        assert!(!d.update(false, 1250));
        assert!(d.update(true, 1400));
    }

    #[test]
    fn test_held_button_fires_once() {
        let mut d = Debouncer::new(300, 0);
        assert!(d.update(true, 500));
        for t in (600..3000).step_by(100) {
            assert!(!d.update(true, t));
        }
    }

    #[test]
    fn test_edge_consumed_even_when_rejected() {
        let mut d = Debouncer::new(300, 0);
        // Pressed inside the window: rejected, and stays rejected while held.
        assert!(!d.update(true, 100));
        assert!(!d.update(true, 900));
    }

    #[test]
    fn test_scripted_button() {
        let mut b = ScriptedButton::new(10);
        let pressed: Vec<u32> = (0..35)
            .filter(|&f| {
                b.set_frame(f);
                b.is_pressed()
            })
            .collect();
        assert_eq!(pressed, [10, 20, 30]);

        let mut never = ScriptedButton::new(0);
        never.set_frame(10);
        assert!(!never.is_pressed());
    }
}
