use crate::state::{StateCommand, StateCommands, StateStack};
use crate::surface::Surface;
use crate::time::{Clock, ClockSource, SystemClock};

use super::ctx::FrameCtx;

/// Control directive returned after each frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Frame driver owning the clock, the state stack and the deferred command queue.
///
/// The host calls [`frame`](Self::frame) once per animation frame. One frame is:
/// 1. `tick_begin`
/// 2. apply commands queued since the previous frame
/// 3. dispatch to the top state (`update` unless paused, then `render`)
/// 4. apply commands queued by the state during dispatch
/// 5. `tick_end`
///
/// Stopping is the host's call: it simply stops calling `frame`.
pub struct Game<S: ClockSource = SystemClock> {
    clock: Clock<S>,
    states: StateStack,
    commands: StateCommands,
    exit_requested: bool,
}

impl Game<SystemClock> {
    /// Wall-clock driven game with an empty root state.
    pub fn new() -> Self {
        Self::with_parts(Clock::new(), StateStack::new())
    }
}

impl Default for Game<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ClockSource> Game<S> {
    pub fn with_parts(clock: Clock<S>, states: StateStack) -> Self {
        Self {
            clock,
            states,
            commands: StateCommands::default(),
            exit_requested: false,
        }
    }

    #[inline]
    pub fn clock(&self) -> &Clock<S> {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut Clock<S> {
        &mut self.clock
    }

    #[inline]
    pub fn states(&self) -> &StateStack {
        &self.states
    }

    /// Direct stack access for setup between frames.
    ///
    /// Input callbacks should go through [`commands`](Self::commands) instead.
    #[inline]
    pub fn states_mut(&mut self) -> &mut StateStack {
        &mut self.states
    }

    /// Queue for stack mutations; applied at the next frame boundary.
    #[inline]
    pub fn commands(&mut self) -> &mut StateCommands {
        &mut self.commands
    }

    #[inline]
    pub fn is_exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Runs one complete frame against `surface`.
    pub fn frame(&mut self, surface: &mut dyn Surface) -> LoopControl {
        if self.exit_requested {
            return LoopControl::Exit;
        }

        let time = self.clock.tick_begin();
        self.apply_commands();

        if !self.exit_requested {
            log::trace!(
                "frame {} dt={:.4}s top='{}' paused={}",
                time.frame_index,
                time.dt,
                self.states.top().name(),
                self.states.is_paused(),
            );

            let mut ctx = FrameCtx::new(
                time,
                surface,
                &mut self.commands,
                &self.clock.config().fps_style,
            );
            self.states.update(&mut ctx);

            self.apply_commands();
        }

        self.clock.tick_end();

        if self.exit_requested {
            log::debug!("exit requested at frame {}", time.frame_index);
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }

    fn apply_commands(&mut self) {
        for cmd in self.commands.drain() {
            match cmd {
                StateCommand::Exit => self.exit_requested = true,
                cmd => {
                    if let Err(e) = self.states.apply(cmd) {
                        log::warn!("deferred state command failed: {e}");
                    }
                }
            }
        }
    }
}
