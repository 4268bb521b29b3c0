//! Confab: a console chatbot with typed, validated interactive prompts.
//!
//! The heart of the crate is [`prompt`], a generically-typed input
//! acquisition engine: describe what you want (a bounded number, an
//! enumeration member, one of a fixed set of options, a yes/no answer, or
//! any plain scalar) and it prompts, reads, validates, and re-prompts
//! until the user produces a conforming value. The rest is the chatbot
//! built around it: transcript storage and the completion client
//! ([`chat`]), settings ([`config`]), the argument surface and
//! conversation menu ([`cli`]), and terminal presentation ([`utils`]).

pub mod chat;
pub mod cli;
pub mod config;
pub mod prompt;
pub mod utils;
