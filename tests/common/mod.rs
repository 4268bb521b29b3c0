//! Shared test utilities and fixture types
//!
//! The prompt engine reads through `LineSource` and writes through
//! `LineSink`, so the whole interactive surface can be scripted: a
//! `Cursor` over prepared lines plays the user, and `RecordingSink`
//! captures everything the engine would have shown, tint included.

use std::io::Cursor;

use confab::prompt::{LineSink, Tint};

confab::prompt_enum! {
    /// A dense three-member enumeration, ordinals 0 through 2.
    pub enum Difficulty {
        Easy = 0,
        Normal = 1,
        Hard = 2,
    }
}

confab::prompt_enum! {
    /// Sparse discriminants: ordinal 2 is deliberately undefined.
    pub enum Spice {
        Mild = 0,
        Medium = 1,
        Extra = 3,
    }
}

/// Sink that records every line with the tint it was written under.
#[derive(Default)]
pub struct RecordingSink {
    pub lines: Vec<(String, Option<Tint>)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded text, one line per entry, tints dropped.
    pub fn text(&self) -> Vec<String> {
        self.lines.iter().map(|(line, _)| line.clone()).collect()
    }

    /// True when any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(line, _)| line.contains(needle))
    }

    /// How many recorded lines contain `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines
            .iter()
            .filter(|(line, _)| line.contains(needle))
            .count()
    }
}

impl LineSink for RecordingSink {
    fn write_line(&mut self, text: &str, tint: Option<Tint>) -> std::io::Result<()> {
        self.lines.push((text.to_string(), tint));
        Ok(())
    }
}

/// A scripted line source: each element plays one line of user input.
pub fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut joined = lines.join("\n");
    joined.push('\n');
    Cursor::new(joined.into_bytes())
}
