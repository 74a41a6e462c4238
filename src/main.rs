use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use git_easyrelease::cli::orchestration::{self, ReleaseWorkflowArgs};
use git_easyrelease::cli::Args;
use git_easyrelease::ui;

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .context("failed to initialise logging")
}

fn main() -> Result<()> {
    // With no arguments at all, show help and succeed
    if std::env::args_os().len() <= 1 {
        Args::command().print_help()?;
        return Ok(());
    }

    let args = Args::parse();
    init_logging(args.verbose)?;

    if args.all_help {
        print!("{}", ui::render_all_help(&mut Args::command()));
        return Ok(());
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let (subcommand, invocation) = command.invocation();
    let workflow_args = ReleaseWorkflowArgs {
        config_path: args.config,
        dry_run: args.dry_run,
        invocation,
    };

    match orchestration::run_release_workflow(subcommand, workflow_args) {
        Ok(result) => {
            let verb = if result.dry_run { "Would run" } else { "Finished" };
            ui::display_success(&format!("{} {} {}", verb, result.subcommand, result.version));
            Ok(())
        }
        Err(e) => {
            log::debug!("{:?}", e);
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
