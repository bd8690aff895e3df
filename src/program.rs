use std::{
    io,
    time::{Duration, Instant},
};

use thiserror::Error;
use tui::{backend::Backend, layout::Rect};

use crate::{
    command::Command,
    event::{Event, Listener},
    model::Model,
    terminal::{CrosstermSurface, Surface},
};

pub const TICK_RATE: Duration = Duration::from_secs(1);

/// Owns the terminal for the lifetime of a model and drives it off a fixed tick.
pub struct Program {
    tick_rate: Duration,
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("could not create terminal surface: {0}")]
    Create(#[source] io::Error),
    #[error("could not initialize terminal surface: {0}")]
    Init(#[source] io::Error),
    #[error("could not restore terminal: {0}")]
    Release(#[source] io::Error),
}

/// Commands a model issued while handling the current event.
#[derive(Debug, Default)]
pub struct Context {
    cmds: Vec<Command>,
}

impl Context {
    pub fn run(&mut self, cmd: Command) {
        self.cmds.push(cmd);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Command> {
        self.cmds.drain(..)
    }
}

pub type ProgramResult = Result<(), ProgramError>;

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Program {
    pub fn new() -> Self {
        Self {
            tick_rate: TICK_RATE,
        }
    }

    pub fn tick(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Runs on the real terminal.
    pub fn run<M, F>(self, build: F) -> ProgramResult
    where
        M: Model,
        F: FnOnce(Rect) -> M,
    {
        self.run_on(&mut CrosstermSurface::default(), build)
    }

    /// Takes over `surface`, builds the model for its size and runs until the model asks
    /// to exit. Once acquired, the surface is released exactly once, including when init fails.
    pub fn run_on<S, M, F>(self, surface: &mut S, build: F) -> ProgramResult
    where
        S: Surface,
        M: Model,
        F: FnOnce(Rect) -> M,
    {
        let mut terminal = surface.acquire()?;
        let area = match surface.init(&mut terminal) {
            Ok(area) => area,
            Err(e) => {
                if let Err(release) = surface.release(&mut terminal) {
                    log::error!("restoring terminal after failed init: {release}");
                }
                return Err(e);
            }
        };

        let listener = Listener::default();
        surface.listen(listener.subscribe());
        let mut model = build(area);

        self.run_event_loop(&mut terminal, &listener, &mut model);

        surface
            .release(&mut terminal)
            .map_err(ProgramError::Release)?;
        log::info!("terminal restored");
        Ok(())
    }

    /// Write errors are logged and the clock keeps going; only an exit request ends the loop.
    fn run_event_loop<B: Backend, M: Model>(
        &self,
        terminal: &mut tui::Terminal<B>,
        listener: &Listener,
        model: &mut M,
    ) {
        let mut cx = Context::default();
        present(terminal, model);

        let mut deadline = Instant::now() + self.tick_rate;
        loop {
            let event = listener.next_until(deadline);
            if event == Event::Tick {
                let now = Instant::now();
                deadline += self.tick_rate;
                if deadline <= now {
                    deadline = now + self.tick_rate;
                }
            }

            model.update(&mut cx, event);
            let mut redraw = false;
            for cmd in cx.drain() {
                match cmd {
                    Command::Exit => {
                        log::info!("exit requested");
                        return;
                    }
                    Command::Resync => {
                        log::info!("resyncing screen");
                        if let Err(e) = terminal.clear() {
                            log::warn!("clearing screen failed: {e}");
                        }
                        redraw = true;
                    }
                    Command::Flush => redraw = true,
                }
            }
            if redraw {
                present(terminal, model);
            }
        }
    }
}

fn present<B: Backend, M: Model>(terminal: &mut tui::Terminal<B>, model: &M) {
    if let Err(e) = terminal.draw(|f| model.view(f)) {
        log::warn!("drawing failed: {e}");
    }
}
