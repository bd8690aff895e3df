use std::{
    sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Instant,
};

use crossterm::event::{
    read, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

pub type EventSender = Sender<Event>;
pub type EventReceiver = Receiver<Event>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    /// The tick interval elapsed.
    Tick,
    /// Esc or Enter.
    Exit,
    /// Ctrl-L or a terminal resize.
    Resync,
}

impl Event {
    /// Maps raw terminal input onto the events the clock reacts to.
    pub fn from_terminal(event: TermEvent) -> Option<Self> {
        match event {
            TermEvent::Key(KeyEvent {
                kind: KeyEventKind::Release | KeyEventKind::Repeat,
                ..
            }) => None,
            TermEvent::Key(KeyEvent {
                code: KeyCode::Esc | KeyCode::Enter,
                ..
            }) => Some(Event::Exit),
            TermEvent::Key(KeyEvent {
                code: KeyCode::Char('l'),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => Some(Event::Resync),
            TermEvent::Resize(..) => Some(Event::Resync),
            _ => None,
        }
    }
}

/// Single consumer end of the event queue.
pub struct Listener {
    sender: EventSender,
    receiver: EventReceiver,
}

impl Default for Listener {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }
}

impl Listener {
    pub fn subscribe(&self) -> EventSender {
        self.sender.clone()
    }

    /// Waits for the next queued event, or returns `Event::Tick` once `deadline` passes.
    pub fn next_until(&self, deadline: Instant) -> Event {
        let timeout = deadline.saturating_duration_since(Instant::now());
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => Event::Tick,
            // Listener holds a sender, so this only happens while tearing down.
            Err(RecvTimeoutError::Disconnected) => Event::Exit,
        }
    }
}

/// Blocks on terminal input in its own thread and forwards what the clock cares about.
pub struct IoProducer {
    pub thread: JoinHandle<()>,
}

impl IoProducer {
    pub fn spawn(sender: EventSender) -> Self {
        let thread = thread::spawn(move || loop {
            let event = match read() {
                Ok(e) => Event::from_terminal(e),
                Err(e) => {
                    log::error!("reading terminal input failed: {e}");
                    Some(Event::Exit)
                }
            };
            let Some(event) = event else { continue };
            if sender.send(event).is_err() || event == Event::Exit {
                return;
            }
        });
        Self { thread }
    }
}
