//! Host-side showcase for the orrery renderer.
//!
//! [`Showcase`] is the interactive frame loop: clamp the frame time, poll the
//! shader button, advance camera and bodies, then redraw and paint the HUD.
//! [`run`] drives it headlessly on a [`Framebuffer`](orrery_render::Framebuffer)
//! and optionally dumps frames to disk.

pub mod clock;
pub mod error;
pub mod input;
pub mod runner;
pub mod showcase;
pub mod snapshot;

pub use clock::{Clock, FpsCounter, FrameTimer, ManualClock, SystemClock};
pub use error::AppError;
pub use input::{Debouncer, ScriptedButton, ShaderButton};
pub use runner::{RunSummary, run};
pub use showcase::Showcase;
pub use snapshot::SnapshotWriter;
