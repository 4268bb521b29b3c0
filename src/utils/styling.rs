//! Styled terminal output using the console crate.

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WAVE: Emoji<'_, '_> = Emoji("👋 ", "");
pub static SPEECH: Emoji<'_, '_> = Emoji("💬 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
 ██████╗ ██████╗ ███╗   ██╗███████╗ █████╗ ██████╗
██╔════╝██╔═══██╗████╗  ██║██╔════╝██╔══██╗██╔══██╗
██║     ██║   ██║██╔██╗ ██║█████╗  ███████║██████╔╝
██║     ██║   ██║██║╚██╗██║██╔══╝  ██╔══██║██╔══██╗
╚██████╗╚██████╔╝██║ ╚████║██║     ██║  ██║██████╔╝
 ╚═════╝ ╚═════╝ ╚═╝  ╚═══╝╚═╝     ╚═╝  ╚═╝╚═════╝
    "#;

    println!("{}", style(banner).cyan().bold());
    println!(
        "{}{}  {}",
        SPEECH,
        style("Talk it over, right from your terminal").dim(),
        style(format!("v{}", version)).dim()
    );
    println!("{}", style("━".repeat(52)).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}{}", INFO, message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

/// Print the parting message shown on every clean exit
pub fn print_goodbye() {
    println!();
    println!("{}{}", WAVE, style("Until next time!").green().bold());
}
