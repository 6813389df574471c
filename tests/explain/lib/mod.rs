use std::{
    io::{self, Write},
    string::FromUtf8Error,
    sync::{Arc, LazyLock, Mutex},
};

use kiexplain::prelude::*;
use regex::Regex;

mod run;
pub use run::*;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Poison,
    FromUtf8(FromUtf8Error),
}

/// Output sink shared between the formatter and the test.
#[derive(Debug, Default, Clone)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.flush()
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        false
    }
}

impl Buffer {
    pub fn try_to_string(&self) -> Result<String, Error> {
        let guard = self.0.lock().map_err(|_| Error::Poison)?;
        let string = String::from_utf8(guard.to_vec()).map_err(Error::FromUtf8)?;
        Ok(string)
    }
}

/// Writes `<clear>` so screen clears show up in snapshots.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkClear;

impl ClearScreen for MarkClear {
    fn clear_screen(&mut self, target: &mut dyn io::Write) -> io::Result<()> {
        target.write_all(b"<clear>")
    }
}

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2}:\d{2}:\d{2}\b").unwrap());

pub fn sanitize_clock(input: &str) -> String {
    CLOCK_RE.replace_all(input, "<time>").to_string()
}
