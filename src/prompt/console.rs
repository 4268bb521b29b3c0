//! Console seams: how the engine reads lines and writes styled text.
//!
//! The engine never touches stdin or stdout directly. It reads through
//! [`LineSource`] and writes through [`LineSink`], so tests swap in
//! in-memory buffers and the application plugs in the real terminal.

use std::io;

use console::{style, Term};

/// Advisory foreground color for sink output. Any sink may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Green,
    Yellow,
    Cyan,
    Magenta,
}

/// Blocking source of input lines. `Ok(None)` signals end of input,
/// which is fatal for the acquisition in progress.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Every buffered reader is a line source; trailing line endings are
/// stripped.
impl<R: io::BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Sink for prompts, option lists, and diagnostics.
pub trait LineSink {
    fn write_line(&mut self, text: &str, tint: Option<Tint>) -> io::Result<()>;
}

/// Production sink: writes to the terminal, mapping tints to ANSI colors.
pub struct StyledSink {
    term: Term,
}

impl StyledSink {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl LineSink for StyledSink {
    fn write_line(&mut self, text: &str, tint: Option<Tint>) -> io::Result<()> {
        let rendered = match tint {
            Some(Tint::Red) => style(text).red().to_string(),
            Some(Tint::Green) => style(text).green().to_string(),
            Some(Tint::Yellow) => style(text).yellow().to_string(),
            Some(Tint::Cyan) => style(text).cyan().to_string(),
            Some(Tint::Magenta) => style(text).magenta().to_string(),
            None => text.to_string(),
        };
        self.term.write_line(&rendered)
    }
}
