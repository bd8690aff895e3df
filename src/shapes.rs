use tui::style::Style;

use crate::{canvas::Canvas, point::Point};

/// Disk of `radius` cells around `center` with a one cell ring of `border` around it.
/// A cell at offset (dx, dy) is filled when dx² + dy² <= r² and bordered when it is within
/// (r + 1)². Cells beyond the ring are left as they were.
pub fn draw_filled_circle(
    canvas: &mut Canvas,
    center: Point,
    radius: i32,
    fill: Style,
    border: Style,
) {
    let inner = radius * radius;
    let outer = (radius + 1) * (radius + 1);
    for dy in -radius - 1..=radius + 1 {
        for dx in -radius - 1..=radius + 1 {
            let distance = dx * dx + dy * dy;
            let style = if distance <= inner {
                fill
            } else if distance <= outer {
                border
            } else {
                continue;
            };
            canvas.set_cell(center.x + dx, center.y + dy, style);
        }
    }
    canvas.mark_dirty();
}

/// Covers `width + 1` by `height + 1` cells from `top_left`: the perimeter gets `border`,
/// the inside gets `fill`.
pub fn draw_filled_rectangle(
    canvas: &mut Canvas,
    top_left: Point,
    width: i32,
    height: i32,
    fill: Style,
    border: Style,
) {
    for y in 0..=height {
        for x in 0..=width {
            let style = if x == 0 || x == width || y == 0 || y == height {
                border
            } else {
                fill
            };
            canvas.set_cell(top_left.x + x, top_left.y + y, style);
        }
    }
    canvas.mark_dirty();
}
