//! The interactive acquisition loop.

use std::io;

use thiserror::Error;

use crate::prompt::category::classify;
use crate::prompt::console::{LineSink, LineSource, Tint};
use crate::prompt::present::present;
use crate::prompt::request::AcquisitionRequest;
use crate::prompt::validate::{validate, ParseOutcome};
use crate::prompt::value::Promptable;

/// Terminating failures of an acquisition. Invalid input never lands
/// here; it is reported through the sink and retried inside the loop.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The line source reached end of input before a value was accepted.
    #[error("input stream closed before a valid value was read")]
    Closed,
    /// Reading or writing the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run one complete acquisition: present the message and options once,
/// then read, validate, and re-prompt until a line passes.
///
/// The category is resolved once, before the first read. Retries are
/// unbounded by design; a rejected line gets a short red diagnostic and
/// another read, and the option list is never rendered again. Blank
/// lines are turned away before any conversion is attempted.
pub fn acquire<T, R, W>(
    request: &AcquisitionRequest<T>,
    source: &mut R,
    sink: &mut W,
) -> Result<T, PromptError>
where
    T: Promptable,
    R: LineSource + ?Sized,
    W: LineSink + ?Sized,
{
    let category = classify(request);

    if let Some(message) = request.message.as_deref() {
        sink.write_line(message, None)?;
    }
    present(request, &category, sink)?;

    loop {
        let Some(line) = source.next_line()? else {
            return Err(PromptError::Closed);
        };
        let raw = line.trim();
        if raw.is_empty() {
            sink.write_line("Invalid input. Please try again.", Some(Tint::Red))?;
            continue;
        }
        match validate(raw, request, &category) {
            ParseOutcome::Accepted(value) => return Ok(value),
            ParseOutcome::Rejected(reason) => {
                sink.write_line(&format!("{}. Please try again.", reason), Some(Tint::Red))?;
            }
        }
    }
}
