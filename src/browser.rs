//! Interactive browsing of the failures of a stopped run.
//!
//! The browser keeps asking for a command until the user quits:
//! - `q` quits
//! - `a` lists all failures, one line each
//! - a number shows the details of that failure, counting from 1
//!
//! Anything else is read as a number the way a lenient integer parse would,
//! so `"2nd"` selects failure 2 and `"foo"` selects failure 0. Numbers that
//! do not name a failure show nothing and the prompt comes right back.

use std::{
    io::{self, BufRead},
    ops::ControlFlow,
};

use crate::{
    failure::FailureRecord,
    formatter::common::{
        color::{Color, SupportsColor},
        render::Renderer,
    },
    terminal::ClearScreen,
};

pub const PROMPT: &str = "Enter fail number, (a)ll fails or (q)uit:\n";
pub const CURSOR: &str = "➡️  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    All,
    /// A 1-based failure number, not checked against the failure list.
    Select(i64),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let option = input.trim().to_lowercase();
        match option.as_str() {
            "q" => Command::Quit,
            "a" => Command::All,
            other => Command::Select(leading_integer(other)),
        }
    }
}

/// Parse the integer at the start of `s`, ignoring whatever follows it.
///
/// Yields 0 if `s` does not start with a number.
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    match negative {
        true => -value,
        false => value,
    }
}

pub struct FailureBrowser<'b, W, C, R> {
    renderer: &'b mut Renderer<W, C>,
    input: &'b mut R,
    failures: &'b [FailureRecord],
}

impl<'b, W, C, R> FailureBrowser<'b, W, C, R>
where
    W: io::Write + SupportsColor,
    C: ClearScreen,
    R: BufRead,
{
    pub fn new(
        renderer: &'b mut Renderer<W, C>,
        input: &'b mut R,
        failures: &'b [FailureRecord],
    ) -> Self {
        Self {
            renderer,
            input,
            failures,
        }
    }

    /// Prompt for commands until the user quits or the input runs dry.
    ///
    /// Returns immediately if there are no failures to browse.
    pub fn run(&mut self) -> io::Result<()> {
        if self.failures.is_empty() {
            return Ok(());
        }

        loop {
            let Some(option) = self.prompt()? else {
                tracing::debug!("input closed, leaving failure browser");
                return Ok(());
            };

            let command = Command::parse(&option);
            tracing::debug!(?command, "failure browser command");
            if self.execute(command)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Ask for the next command, `None` once the input is exhausted.
    pub fn prompt(&mut self) -> io::Result<Option<String>> {
        self.renderer.empty_line(1)?;
        self.renderer.text(PROMPT, Color::BoldWhite)?;
        self.renderer.text(CURSOR, Color::White)?;
        self.renderer.flush()?;

        // Undecodable bytes become junk input instead of an error.
        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&line).into_owned())),
        }
    }

    pub fn execute(&mut self, command: Command) -> io::Result<ControlFlow<()>> {
        match command {
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::All => self.show_list()?,
            Command::Select(number) => match self.lookup(number) {
                Some(failure) => self.show_details(number, failure)?,
                None => tracing::trace!(number, "no failure with that number"),
            },
        }

        Ok(ControlFlow::Continue(()))
    }

    /// The failure with the 1-based `number`, if there is one.
    pub fn lookup(&self, number: i64) -> Option<&'b FailureRecord> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        self.failures.get(index)
    }

    /// One line per failure between two rules.
    pub fn show_list(&mut self) -> io::Result<()> {
        self.renderer.clear_screen()?;
        self.renderer.line(Color::White)?;
        for (index, failure) in self.failures.iter().enumerate() {
            let entry = format!("FAIL #{} - {}\n", index + 1, failure.description);
            self.renderer.text(&entry, Color::Red)?;
        }
        self.renderer.line(Color::White)
    }

    pub fn show_all_details(&mut self) -> io::Result<()> {
        for (number, failure) in (1..).zip(self.failures) {
            self.show_details(number, failure)?;
        }
        Ok(())
    }

    pub fn show_details(&mut self, number: i64, failure: &FailureRecord) -> io::Result<()> {
        let renderer = &mut *self.renderer;
        renderer.clear_screen()?;
        renderer.line(Color::BoldCyan)?;

        let label = format!(" FAIL #{number}: ");
        renderer.text(&label, Color::BoldCyan)?;
        renderer.text(&format!("{}\n", failure.group_description), Color::BoldYellow)?;
        let indent = " ".repeat(label.chars().count());
        renderer.text(&format!("{indent}{}", failure.description), Color::BoldWhite)?;
        renderer.line(Color::BoldCyan)?;
        renderer.empty_line(1)?;

        renderer.text(" ERROR MESSAGE:\n", Color::BoldYellow)?;
        for line in &failure.message_lines {
            renderer.raw(&format!(" {line}"))?;
            renderer.empty_line(1)?;
        }
        renderer.empty_line(1)?;

        renderer.text(" BACKTRACE:\n", Color::BoldYellow)?;
        for location in &failure.backtrace {
            renderer.text(&format!(" {location}\n"), Color::White)?;
        }
        renderer.line(Color::BoldCyan)
    }
}
