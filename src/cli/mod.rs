//! CLI module - argument parsing and the startup conversation menu

mod args;
mod menu;

pub use args::{Cli, Commands};
pub use menu::*;
