//! User interface module - status output and consolidated help.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Help rendering across the whole command tree

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_dry_run_command, display_error, display_status, display_success, program_header,
};

/// Render the root help followed by the help of every subcommand, each
/// under its own program header.
pub fn render_all_help(cmd: &mut clap::Command) -> String {
    cmd.build();

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", program_header(cmd.get_name())));
    out.push_str(&cmd.render_help().to_string());

    let root = cmd.get_name().to_string();
    for sub in cmd.get_subcommands_mut() {
        if sub.get_name() == "help" {
            continue;
        }
        let title = format!("{} {}", root, sub.get_name());
        out.push_str(&format!("\n{}\n\n", program_header(&title)));
        out.push_str(&sub.render_help().to_string());
    }

    out
}
