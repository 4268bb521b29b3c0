//! Startup menu: start, resume, or delete conversations.
//!
//! Every choice here is read through the prompt engine, which makes the
//! menu its first production consumer: an enumeration for the action, a
//! bounded number for row picks, a yes/no pair for delete confirmation,
//! and free text for new names.

use std::io;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};

use crate::chat::{Transcript, TranscriptEntry, TranscriptStore};
use crate::prompt::{acquire, AcquisitionRequest, LineSink, LineSource, Tint};

crate::prompt_enum! {
    /// Top-level actions offered on startup.
    pub enum MenuAction {
        New = 0,
        Load = 1,
        Delete = 2,
        Exit = 3,
    }
}

/// What the menu settled on; the caller owns everything that follows.
#[derive(Debug)]
pub enum MenuOutcome {
    /// Start a fresh conversation under `name`.
    New { name: String },
    /// Continue a saved conversation.
    Resume { name: String, transcript: Transcript },
    /// Leave without chatting.
    Exit,
}

/// Drive the menu until the user starts, resumes, or exits.
pub fn run_menu<R, W>(store: &TranscriptStore, source: &mut R, sink: &mut W) -> Result<MenuOutcome>
where
    R: LineSource + ?Sized,
    W: LineSink + ?Sized,
{
    loop {
        let entries = store.entries()?;
        if entries.is_empty() {
            sink.write_line(
                "No conversations saved yet. Starting a new one.",
                Some(Tint::Cyan),
            )?;
            let name = acquire_name(source, sink)?;
            return Ok(MenuOutcome::New { name });
        }
        render_conversation_table(&entries, sink)?;

        let action: MenuAction =
            acquire(&AcquisitionRequest::plain("Choose an option:"), source, sink)?;
        match action {
            MenuAction::New => {
                let name = acquire_name(source, sink)?;
                return Ok(MenuOutcome::New { name });
            }
            MenuAction::Load => {
                let index = pick_index(
                    "Enter the number of the conversation to load:",
                    entries.len(),
                    source,
                    sink,
                )?;
                let name = entries[index].name.clone();
                let transcript = store.load(&name)?;
                return Ok(MenuOutcome::Resume { name, transcript });
            }
            MenuAction::Delete => {
                let index = pick_index(
                    "Enter the number of the conversation to delete:",
                    entries.len(),
                    source,
                    sink,
                )?;
                let name = &entries[index].name;
                let confirmed: bool = acquire(
                    &AcquisitionRequest::with_string_options(
                        format!("Delete '{}'?", name),
                        ["Yes", "No"],
                    ),
                    source,
                    sink,
                )?;
                if confirmed {
                    if store.delete(name)? {
                        sink.write_line(&format!("Deleted '{}'.", name), Some(Tint::Green))?;
                    }
                } else {
                    sink.write_line("Nothing deleted.", Some(Tint::Yellow))?;
                }
            }
            MenuAction::Exit => return Ok(MenuOutcome::Exit),
        }
    }
}

/// Render the saved-conversation listing as a numbered table.
pub fn render_conversation_table<W>(entries: &[TranscriptEntry], sink: &mut W) -> io::Result<()>
where
    W: LineSink + ?Sized,
{
    sink.write_line("Saved conversations:", Some(Tint::Cyan))?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Conversation").add_attribute(Attribute::Bold),
        Cell::new("Last updated").add_attribute(Attribute::Bold),
    ]);

    for (index, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&entry.name),
            Cell::new(entry.updated.format("%Y-%m-%d %H:%M")),
        ]);
    }

    for line in table.to_string().lines() {
        sink.write_line(line, None)?;
    }
    Ok(())
}

/// Read a conversation name, re-prompting past anything the store would
/// refuse to turn into a file name.
fn acquire_name<R, W>(source: &mut R, sink: &mut W) -> Result<String>
where
    R: LineSource + ?Sized,
    W: LineSink + ?Sized,
{
    let request = AcquisitionRequest::<String> {
        show_options: false,
        ..AcquisitionRequest::plain("Enter a name for the new conversation:")
    };
    loop {
        let name: String = acquire(&request, source, sink)?;
        if TranscriptStore::is_valid_name(&name) {
            return Ok(name.trim().to_string());
        }
        sink.write_line(
            "Names may not contain path separators or start with a dot. Please try again.",
            Some(Tint::Red),
        )?;
    }
}

/// Pick a 1-based row number out of `count`, returned as a 0-based index.
fn pick_index<R, W>(message: &str, count: usize, source: &mut R, sink: &mut W) -> Result<usize>
where
    R: LineSource + ?Sized,
    W: LineSink + ?Sized,
{
    let pick: usize = acquire(
        &AcquisitionRequest::numeric_range(message, 1, count),
        source,
        sink,
    )?;
    Ok(pick - 1)
}
