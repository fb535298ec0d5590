//! Blocking host loop.
//!
//! Drives a `Game` frame after frame, pacing to a target rate, until a state
//! requests exit or a frame budget is spent.

mod config;
mod runner;

pub use config::RuntimeConfig;
pub use runner::{RunSummary, Runtime};
