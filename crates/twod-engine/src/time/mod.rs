//! Time subsystem.
//!
//! Provides frame timing without coupling to states or the host loop.
//! Intended usage:
//! - one `Clock` per frame loop
//! - `tick_begin()` before the frame's work, `tick_end()` after it

mod clock;
mod source;

pub use clock::{Clock, ClockConfig, FrameTime};
pub(crate) use clock::paint_fps;
pub use source::{ClockSource, ManualClock, SystemClock};
