mod canvas;
mod clock;
mod command;
mod event;
mod layout;
mod model;
mod palette;
mod point;
mod program;
mod reading;
mod shapes;
mod terminal;
mod widgets;

use std::fs::File;

use clock::Clock;
use log::LevelFilter;
use program::Program;

const LOG_FILE_NAME: &str = "binary-clock.log";

/// The terminal belongs to the clock, so records go to a file in the temp dir. Without one the
/// clock runs unlogged.
fn init_logging() {
    let mut log_path = std::env::temp_dir();
    log_path.push(LOG_FILE_NAME);

    let Ok(log_file) = File::options().append(true).create(true).open(&log_path) else {
        return;
    };
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
}

fn main() {
    init_logging();
    log::info!("starting binary clock");

    if let Err(e) = Program::new().tick(program::TICK_RATE).run(Clock::new) {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
    log::info!("binary clock stopped");
}
