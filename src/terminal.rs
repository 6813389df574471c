//! Screen clearing before the big redraws.
//!
//! The explain formatter wipes the terminal when a run starts and every time
//! the failure browser switches views. How that happens is up to a
//! [`ClearScreen`] implementation, so tests and non-interactive sinks can
//! opt out.

use std::io;

use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};

pub trait ClearScreen {
    fn clear_screen(&mut self, target: &mut dyn io::Write) -> io::Result<()>;
}

/// Clears the screen by writing crossterm commands into the output sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermClear;

impl ClearScreen for CrosstermClear {
    fn clear_screen(&mut self, target: &mut dyn io::Write) -> io::Result<()> {
        target
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?
            .flush()
    }
}

/// Never clears anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClear;

impl ClearScreen for NoClear {
    fn clear_screen(&mut self, _: &mut dyn io::Write) -> io::Result<()> {
        Ok(())
    }
}
