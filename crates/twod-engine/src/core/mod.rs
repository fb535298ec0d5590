//! Core frame-driver contracts.
//!
//! This module defines the seam between the host loop and states: the per-frame
//! context states receive, and the `Game` driver that sequences clock ticks,
//! deferred stack commands and dispatch.

mod ctx;
mod game;

pub use ctx::FrameCtx;
pub use game::{Game, LoopControl};

#[cfg(test)]
pub(crate) use ctx::test_support;
