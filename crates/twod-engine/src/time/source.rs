use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Provider of the current time in milliseconds.
///
/// Only differences between readings matter; the epoch is source-defined.
pub trait ClockSource {
    fn now_ms(&self) -> f64;
}

/// Monotonic source measuring milliseconds since its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Host-advanced source.
///
/// Clones share the same reading, so a test (or a fixed-step host) can keep a
/// handle and advance time while a `Clock` owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl ClockSource for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl<S: ClockSource + ?Sized> ClockSource for &S {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}
