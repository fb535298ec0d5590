//! TwoD engine crate.
//!
//! A state stack driven by a delta-time frame loop. The host owns the loop and
//! the drawing surface; this crate decides which state is live and paces it.

pub mod coords;
pub mod core;
pub mod error;
pub mod logging;
pub mod paint;
pub mod runtime;
pub mod state;
pub mod surface;
pub mod time;
