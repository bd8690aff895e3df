use tui::{buffer::Buffer, layout::Rect, style::Style};

use crate::terminal::within;

/// Every cell the clock has painted so far. Cells keep their style until painted over, so
/// shapes only need to write the cells they cover.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    buffer: Buffer,
    base: Style,
    dirty: bool,
}

impl Canvas {
    /// Blank canvas filled with `base`. Starts dirty so the first frame presents the cleared
    /// screen.
    pub fn new(area: Rect, base: Style) -> Self {
        let mut buffer = Buffer::empty(area);
        buffer.set_style(area, base);
        Canvas {
            buffer,
            base,
            dirty: true,
        }
    }

    /// Style of cells nothing has painted, including any past the canvas edge.
    pub fn base(&self) -> Style {
        self.base
    }

    pub fn area(&self) -> Rect {
        *self.buffer.area()
    }

    /// Paints a blank cell. Points outside the canvas are dropped.
    pub fn set_cell(&mut self, x: i32, y: i32, style: Style) {
        if !within(&self.area(), x, y) {
            return;
        }
        self.buffer
            .get_mut(x as u16, y as u16)
            .set_symbol(" ")
            .set_style(style);
    }

    #[cfg(test)]
    pub fn cell(&self, x: i32, y: i32) -> Option<&tui::buffer::Cell> {
        within(&self.area(), x, y).then(|| self.buffer.get(x as u16, y as u16))
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a flush is pending and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
