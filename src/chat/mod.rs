//! Chat domain: message model, transcript persistence, completion client.

pub mod client;
pub mod message;
pub mod transcript;

pub use client::*;
pub use message::*;
pub use transcript::*;
