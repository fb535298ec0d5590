//! Drawable surface capability.
//!
//! The frame driver never creates or owns a surface. The host hands one to
//! `Game::frame` and it is forwarded, opaquely, into state callbacks.

mod cmd;
mod recording;

pub use cmd::{DrawCmd, RectCmd, TextCmd, TextStyle};
pub use recording::RecordingSurface;

use crate::coords::Vec2;
use crate::paint::Color;

/// Something states can draw onto.
pub trait Surface {
    /// Drawable size in surface pixels.
    fn size(&self) -> Vec2;

    /// Clears the whole surface.
    fn clear(&mut self);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Draws a single line of text with its baseline-left at `origin`.
    fn fill_text(&mut self, text: &str, origin: Vec2, style: &TextStyle);
}
