//! Surface coordinates.
//!
//! Only the small amount of geometry the frame driver hands to surfaces lives here.
//! Game math belongs to the states that need it.

mod vec2;

pub use vec2::Vec2;
