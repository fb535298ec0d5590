//! Paint values passed to surfaces.

pub mod color;

pub use color::Color;
