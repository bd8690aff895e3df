/// Requests a model makes of the program after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    /// Repaint the whole physical screen.
    Resync,
    /// Present the cells changed since the last flush.
    Flush,
}
