use tui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::canvas::Canvas;

/// Copies the painted canvas into the frame. Frame cells past the canvas get its base style;
/// canvas cells past the frame are dropped.
pub struct CanvasWidget<'c> {
    canvas: &'c Canvas,
}

impl<'c> CanvasWidget<'c> {
    pub fn new(canvas: &'c Canvas) -> Self {
        CanvasWidget { canvas }
    }
}

impl<'c> Widget for CanvasWidget<'c> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let source = self.canvas.buffer();
        let visible = *buf.area();
        if !area.intersects(visible) {
            return;
        }
        let area = area.intersection(visible);
        buf.set_style(area, self.canvas.base());
        if !area.intersects(*source.area()) {
            return;
        }
        let area = area.intersection(*source.area());
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                *buf.get_mut(x, y) = source.get(x, y).clone();
            }
        }
    }
}
