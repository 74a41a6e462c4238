//! Main workflow orchestration logic
//!
//! This module contains the release workflow driven by `main.rs`. It keeps
//! CLI argument parsing apart from the steps of a release: tool check,
//! configuration, repository access, version resolution and git-flow
//! invocation.

use crate::analyzer::ResolvedVersion;
use crate::config::{self, Config};
use crate::error::{EasyReleaseError, Result};
use crate::flow::{self, CommandRunner, DryRunRunner, SystemRunner};
use crate::git::{Git2Repository, Repository};

use super::{Invocation, Subcommand};

/// Arguments for the release workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Print commands instead of running them
    pub dry_run: bool,

    /// Subcommand arguments
    pub invocation: Invocation,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The subcommand that ran
    pub subcommand: &'static str,

    /// The version handed to git-flow
    pub version: ResolvedVersion,

    /// Whether the commands were only printed
    pub dry_run: bool,
}

/// Main release workflow
///
/// Orchestrates one invocation:
/// 1. Ensure git-flow is installed
/// 2. Load configuration
/// 3. Open the repository in the current directory
/// 4. Resolve the version and run the release commands
pub fn run_release_workflow(
    subcommand: &'static Subcommand,
    args: ReleaseWorkflowArgs,
) -> Result<WorkflowResult> {
    if !flow::git_flow_available() {
        return Err(EasyReleaseError::GitFlowMissing);
    }

    let config = config::load_config(args.config_path.as_deref())?;
    let repo = Git2Repository::open(".")?;

    if args.dry_run {
        execute_with(subcommand, &args.invocation, &config, &repo, &DryRunRunner, true)
    } else {
        execute_with(
            subcommand,
            &args.invocation,
            &config,
            &repo,
            &SystemRunner::interactive(),
            false,
        )
    }
}

/// Run a subcommand against an explicit repository and runner
pub fn execute_with<R, C>(
    subcommand: &'static Subcommand,
    invocation: &Invocation,
    config: &Config,
    repo: &R,
    runner: &C,
    dry_run: bool,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    C: CommandRunner + ?Sized,
{
    let version = subcommand.execute(invocation, config, repo, runner)?;

    Ok(WorkflowResult {
        subcommand: subcommand.name,
        version,
        dry_run,
    })
}
