use crate::coords::Vec2;
use crate::error::DrawError;
use crate::paint::Color;
use crate::surface::{Surface, TextStyle};

use super::source::{ClockSource, SystemClock};

/// Frame timing snapshot taken by [`Clock::tick_begin`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame ended its tick, in seconds.
    pub dt: f64,

    /// Instantaneous frames per second, `1 / dt`. Infinite when `dt == 0`.
    pub fps: f64,

    /// Source timestamp read at the tick, in milliseconds.
    pub now_ms: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Clock tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// Upper bound for `dt`, in seconds. Must be finite and positive; the
    /// clock falls back to the default otherwise.
    pub max_dt: f64,

    /// Style used by [`Clock::draw_fps`].
    pub fps_style: TextStyle,
}

const DEFAULT_MAX_DT: f64 = 1.0;

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            max_dt: DEFAULT_MAX_DT,
            fps_style: TextStyle::new("monospace", 15.0, Color::GREEN),
        }
    }
}

impl ClockConfig {
    pub fn max_dt(mut self, secs: f64) -> Self {
        self.max_dt = secs;
        self
    }

    pub fn fps_style(mut self, style: TextStyle) -> Self {
        self.fps_style = style;
        self
    }
}

/// Per-loop delta-time and FPS tracker.
///
/// Call [`tick_begin`](Self::tick_begin) before any update/render work of a frame
/// and [`tick_end`](Self::tick_end) after all of it, so the next delta includes
/// the time the frame itself took.
///
/// `dt` is clamped to `[0, max_dt]`: a backgrounded host resumes with one capped
/// step instead of a huge jump.
#[derive(Debug, Clone)]
pub struct Clock<S: ClockSource = SystemClock> {
    source: S,
    config: ClockConfig,

    last_ms: f64,
    current_ms: f64,
    dt: f64,
    fps: f64,
    frame_index: u64,
    in_frame: bool,
}

impl Clock<SystemClock> {
    /// Creates a wall-clock driven clock with default config.
    pub fn new() -> Self {
        Self::with_source(SystemClock::new())
    }
}

impl Default for Clock<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ClockSource> Clock<S> {
    pub fn with_source(source: S) -> Self {
        Self::with_config(source, ClockConfig::default())
    }

    pub fn with_config(source: S, mut config: ClockConfig) -> Self {
        if !(config.max_dt.is_finite() && config.max_dt > 0.0) {
            log::warn!(
                "clock max_dt {} is not a positive number; using {DEFAULT_MAX_DT}",
                config.max_dt
            );
            config.max_dt = DEFAULT_MAX_DT;
        }

        let now = source.now_ms();
        let now = if now.is_finite() {
            now
        } else {
            log::warn!("clock source returned {now} at construction; starting from 0");
            0.0
        };
        Self {
            source,
            config,
            last_ms: now,
            current_ms: now,
            dt: 0.0,
            fps: 0.0,
            frame_index: 0,
            in_frame: false,
        }
    }

    /// Samples the source and computes `dt`/`fps` for the frame about to run.
    ///
    /// Leaves the baseline untouched; [`tick_end`](Self::tick_end) moves it.
    pub fn tick_begin(&mut self) -> FrameTime {
        if self.in_frame {
            log::warn!("tick_begin called twice without tick_end (frame {})", self.frame_index);
        }

        self.current_ms = self.sample();
        // `max(0.0)` also maps a NaN difference to zero.
        self.dt = ((self.current_ms - self.last_ms) / 1000.0).max(0.0).min(self.config.max_dt);
        // Infinite on a zero-length frame.
        self.fps = 1.0 / self.dt;
        self.in_frame = true;

        self.frame_time()
    }

    /// Closes the frame: the next delta is measured from this frame's start sample.
    pub fn tick_end(&mut self) {
        if !self.in_frame {
            log::warn!("tick_end called without tick_begin; ignored");
            return;
        }

        self.last_ms = self.current_ms;
        self.frame_index = self.frame_index.wrapping_add(1);
        self.in_frame = false;
    }

    /// Rebases the clock to now, e.g. after the host was suspended.
    pub fn reset(&mut self) {
        let now = self.sample();
        self.last_ms = now;
        self.current_ms = now;
        self.in_frame = false;
    }

    /// Reads the source, holding the baseline when it yields a non-finite value.
    fn sample(&self) -> f64 {
        let now = self.source.now_ms();
        if now.is_finite() {
            now
        } else {
            log::warn!("clock source returned {now}; treating frame {} as zero-length", self.frame_index);
            self.last_ms
        }
    }

    /// Snapshot of the most recent `tick_begin`.
    pub fn frame_time(&self) -> FrameTime {
        FrameTime {
            dt: self.dt,
            fps: self.fps,
            now_ms: self.current_ms,
            frame_index: self.frame_index,
        }
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    #[inline]
    pub fn last_timestamp(&self) -> f64 {
        self.last_ms
    }

    #[inline]
    pub fn current_timestamp(&self) -> f64 {
        self.current_ms
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Paints the current FPS value at `(x, y)` using the configured style.
    ///
    /// Nothing is drawn when the coordinates or style are unusable.
    pub fn draw_fps(&self, surface: &mut dyn Surface, x: f32, y: f32) -> Result<(), DrawError> {
        paint_fps(surface, self.fps, x, y, &self.config.fps_style)
    }
}

pub(crate) fn paint_fps(
    surface: &mut dyn Surface,
    fps: f64,
    x: f32,
    y: f32,
    style: &TextStyle,
) -> Result<(), DrawError> {
    let origin = Vec2::new(x, y);
    if !origin.is_finite() {
        return Err(DrawError::invalid(format!("fps position ({x}, {y}) is not finite")));
    }
    if !(style.size_px.is_finite() && style.size_px > 0.0) {
        return Err(DrawError::invalid(format!("fps font size {} is not positive", style.size_px)));
    }
    if !style.color.is_finite() {
        return Err(DrawError::invalid("fps color has non-finite channels"));
    }

    surface.fill_text(&format_fps(fps), origin, style);
    Ok(())
}

fn format_fps(fps: f64) -> String {
    if fps.is_infinite() {
        "inf".to_owned()
    } else {
        format!("{fps:.0}")
    }
}
