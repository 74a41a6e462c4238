//! Pure formatting functions for UI output.
//!
//! Styling goes through `console`, which drops the escape codes when the
//! terminal cannot show colors.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a command that would have been run.
pub fn display_dry_run_command(argv: &[String]) {
    println!("{} {}", style("[dry-run]").cyan(), style(argv.join(" ")).bold());
}

/// Header printed above each help section of `--all-help`.
pub fn program_header(name: &str) -> String {
    style(name).green().bold().underlined().to_string()
}
