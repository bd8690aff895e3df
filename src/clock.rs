use tui::{backend::Backend, layout::Rect, Frame};

use crate::{
    canvas::Canvas,
    command::Command,
    event::Event,
    layout::{Layout, RowGeometry, ROW_HEIGHT},
    model::Model,
    palette::Role,
    program::Context,
    reading::ClockReading,
    shapes::{draw_filled_circle, draw_filled_rectangle},
    widgets::CanvasWidget,
};

/// Whether the centre circle is lit on the current tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Blink {
    On,
    #[default]
    Off,
}

impl Blink {
    pub fn toggled(self) -> Self {
        match self {
            Blink::On => Blink::Off,
            Blink::Off => Blink::On,
        }
    }
}

/// Pulsing circle over four rows of five-hour, hour, five-minute and minute boxes.
#[derive(Debug)]
pub struct Clock {
    canvas: Canvas,
    layout: Layout,
    blink: Blink,
    ticks: u64,
}

impl Clock {
    pub fn new(area: Rect) -> Self {
        let layout = Layout::new(area);
        log::info!(
            "clock area {}x{}, circle at ({}, {})",
            area.width,
            area.height,
            layout.center.x,
            layout.center.y
        );
        Clock {
            canvas: Canvas::new(area, Role::Background.style()),
            layout,
            blink: Blink::default(),
            ticks: 0,
        }
    }

    #[cfg(test)]
    pub fn blink(&self) -> Blink {
        self.blink
    }

    #[cfg(test)]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[cfg(test)]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Flips the blink state and repaints the circle and every row for `reading`.
    pub fn tick(&mut self, reading: ClockReading) {
        self.blink = self.blink.toggled();
        self.ticks += 1;

        let fill = match self.blink {
            Blink::On => Role::ActiveHour,
            Blink::Off => Role::Idle,
        };
        draw_filled_circle(
            &mut self.canvas,
            self.layout.center,
            self.layout.radius,
            fill.style(),
            Role::Border.style(),
        );

        let segments = reading.segments();
        log::debug!(
            "tick {} {:?} {:02}:{:02} -> {:?}",
            self.ticks,
            self.blink,
            reading.hour(),
            reading.minute(),
            segments
        );
        let lit = [
            segments.hour_tens,
            segments.hour_ones,
            segments.minute_tens,
            segments.minute_ones,
        ];
        for (row, lit) in self.layout.rows().into_iter().zip(lit) {
            draw_row(&mut self.canvas, row, lit);
        }
    }
}

fn draw_row(canvas: &mut Canvas, row: &RowGeometry, lit: u32) {
    for slot in 1..=row.slots {
        draw_filled_rectangle(
            canvas,
            row.slot_origin(slot),
            row.slot_width,
            ROW_HEIGHT,
            row.role_for(slot, lit).style(),
            Role::Border.style(),
        );
    }
}

impl Model for Clock {
    fn update(&mut self, cx: &mut Context, event: Event) {
        match event {
            Event::Tick => {
                self.tick(ClockReading::now());
                if self.canvas.take_dirty() {
                    cx.run(Command::Flush);
                }
            }
            Event::Exit => cx.run(Command::Exit),
            Event::Resync => cx.run(Command::Resync),
        }
    }

    fn view<B: Backend>(&self, f: &mut Frame<B>) {
        f.render_widget(CanvasWidget::new(&self.canvas), f.size());
    }
}
