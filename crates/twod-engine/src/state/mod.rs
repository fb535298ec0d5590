//! Application states and the stack that schedules them.
//!
//! Lifecycle of a state:
//! - pushed: `on_enter`, then it is the live top
//! - `pause`/`resume`: toggle its paused flag (paused states still render)
//! - popped: `on_exit`, then dropped
//!
//! Mutations requested during a frame go through `StateCommands` and are applied
//! by the frame driver between frames.

mod commands;
mod hook_state;
mod stack;
#[allow(clippy::module_inception)]
mod state;

pub use commands::{StateCommand, StateCommands};
pub use hook_state::HookState;
pub use stack::StateStack;
pub use state::{EmptyState, State};

#[cfg(test)]
pub(crate) use stack::tests::{CallLog, Tracer};
