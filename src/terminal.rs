use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};

use crate::{
    event::{EventSender, IoProducer},
    program::ProgramError,
};

pub type Terminal = tui::Terminal<CrosstermBackend<Stdout>>;

pub fn within(rect: &Rect, x: i32, y: i32) -> bool {
    x >= i32::from(rect.left())
        && x < i32::from(rect.right())
        && y >= i32::from(rect.top())
        && y < i32::from(rect.bottom())
}

/// Where the program draws and reads input from. `acquire` and `release` bracket a run;
/// `release` is called once for every successful `acquire`.
pub trait Surface {
    type Backend: Backend;

    fn acquire(&mut self) -> Result<tui::Terminal<Self::Backend>, ProgramError>;
    fn init(&mut self, terminal: &mut tui::Terminal<Self::Backend>) -> Result<Rect, ProgramError>;
    /// Starts forwarding input events into `sender`.
    fn listen(&mut self, sender: EventSender);
    fn release(&mut self, terminal: &mut tui::Terminal<Self::Backend>) -> io::Result<()>;
}

/// The real terminal: raw mode plus the alternate screen.
#[derive(Default)]
pub struct CrosstermSurface {
    io_producer: Option<IoProducer>,
}

impl Surface for CrosstermSurface {
    type Backend = CrosstermBackend<Stdout>;

    fn acquire(&mut self) -> Result<Terminal, ProgramError> {
        enable_raw_mode().map_err(ProgramError::Create)?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(ProgramError::Create(e));
        }
        Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
            let mut stdout = io::stdout();
            execute!(stdout, LeaveAlternateScreen).ok();
            disable_raw_mode().ok();
            ProgramError::Create(e)
        })
    }

    fn init(&mut self, terminal: &mut Terminal) -> Result<Rect, ProgramError> {
        terminal.hide_cursor().map_err(ProgramError::Init)?;
        terminal.clear().map_err(ProgramError::Init)?;
        terminal.size().map_err(ProgramError::Init)
    }

    fn listen(&mut self, sender: EventSender) {
        self.io_producer = Some(IoProducer::spawn(sender));
    }

    fn release(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let restored = first_error([
            disable_raw_mode(),
            execute!(terminal.backend_mut(), LeaveAlternateScreen),
            terminal.show_cursor(),
        ]);
        // Still blocked in `read()` unless it forwarded an exit.
        if let Some(producer) = self.io_producer.take() {
            if producer.thread.is_finished() && producer.thread.join().is_err() {
                log::warn!("input listener panicked");
            }
        }
        restored
    }
}

/// Every step has already run; reports the earliest failure.
fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clips_to_rect() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(within(&rect, 2, 3));
        assert!(within(&rect, 5, 7));
        assert!(!within(&rect, 6, 3));
        assert!(!within(&rect, 2, 8));
        assert!(!within(&rect, -1, 4));
        assert!(!within(&rect, 3, -20));
    }

    #[test]
    fn release_reports_the_first_failed_step() {
        let failed =
            |msg: &str| -> io::Result<()> { Err(io::Error::new(io::ErrorKind::Other, msg.to_owned())) };

        let err = first_error([failed("raw mode"), Ok(()), failed("cursor")]).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");

        let err = first_error([Ok(()), Ok(()), failed("cursor")]).unwrap_err();
        assert_eq!(err.to_string(), "cursor");

        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }
}
