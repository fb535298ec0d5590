use crate::error::DrawError;
use crate::state::StateCommands;
use crate::surface::{Surface, TextStyle};
use crate::time::{paint_fps, FrameTime};

/// Per-frame context passed to `State::update` and `State::render`.
///
/// `'a` is the duration of the frame dispatch.
pub struct FrameCtx<'a> {
    pub time: FrameTime,
    /// Whether the state being dispatched is paused; set by the stack.
    pub paused: bool,
    pub surface: &'a mut dyn Surface,
    /// Stack mutations requested by the running state, applied after the frame.
    pub commands: &'a mut StateCommands,
    fps_style: &'a TextStyle,
}

impl<'a> FrameCtx<'a> {
    pub fn new(
        time: FrameTime,
        surface: &'a mut dyn Surface,
        commands: &'a mut StateCommands,
        fps_style: &'a TextStyle,
    ) -> Self {
        Self { time, paused: false, surface, commands, fps_style }
    }

    /// Seconds since the previous frame, clamped by the clock.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.time.dt
    }

    /// Paints this frame's FPS value at `(x, y)`.
    pub fn draw_fps(&mut self, x: f32, y: f32) -> Result<(), DrawError> {
        paint_fps(&mut *self.surface, self.time.fps, x, y, self.fps_style)
    }
}
