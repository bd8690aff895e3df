use once_cell::sync::Lazy;
use tui::style::{Color, Style};

const ORANGE: Color = Color::Rgb(255, 165, 0);
const RED: Color = Color::Rgb(255, 0, 0);

/// What a painted cell means, independent of how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Default screen style: black on white.
    Background,
    Idle,
    ActiveHour,
    ActiveMinute,
    /// Every third lit slot of the five-minute row.
    Accent,
    Border,
}

struct Palette {
    background: Style,
    idle: Style,
    active_hour: Style,
    active_minute: Style,
    accent: Style,
    border: Style,
}

static PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    background: Style::default().fg(Color::Black).bg(Color::White),
    idle: Style::default().bg(Color::White),
    active_hour: Style::default().bg(ORANGE),
    active_minute: Style::default().bg(ORANGE),
    accent: Style::default().bg(RED),
    border: Style::default().bg(Color::Gray),
});

impl Role {
    pub fn style(self) -> Style {
        let palette = &*PALETTE;
        match self {
            Role::Background => palette.background,
            Role::Idle => palette.idle,
            Role::ActiveHour => palette.active_hour,
            Role::ActiveMinute => palette.active_minute,
            Role::Accent => palette.accent,
            Role::Border => palette.border,
        }
    }
}
