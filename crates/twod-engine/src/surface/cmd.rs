use crate::coords::Vec2;
use crate::paint::Color;

/// Text appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name understood by the surface (e.g. `"monospace"`).
    pub family: String,
    /// Font size in surface pixels.
    pub size_px: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, size_px: f32, color: Color) -> Self {
        Self { family: family.into(), size_px, color }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("monospace", 15.0, Color::WHITE)
    }
}

/// Rectangle fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub origin: Vec2,
    pub size: Vec2,
    pub color: Color,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub origin: Vec2,
    pub style: TextStyle,
}

/// Surface-agnostic record of a draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    Rect(RectCmd),
    Text(TextCmd),
}
