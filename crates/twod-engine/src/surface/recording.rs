use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCmd, RectCmd, Surface, TextCmd, TextStyle};

/// Surface that records every draw call instead of rasterizing.
///
/// Used by headless hosts and tests. `clear()` is recorded as a command rather
/// than discarding history; call [`take`](Self::take) to drain between frames.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Vec2,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height), cmds: Vec::new() }
    }

    /// Commands in call order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Drains recorded commands.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }

    /// Recorded text strings, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.cmds.push(DrawCmd::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.cmds.push(DrawCmd::Rect(RectCmd { origin, size, color }));
    }

    fn fill_text(&mut self, text: &str, origin: Vec2, style: &TextStyle) {
        self.cmds.push(DrawCmd::Text(TextCmd {
            text: text.to_owned(),
            origin,
            style: style.clone(),
        }));
    }
}
