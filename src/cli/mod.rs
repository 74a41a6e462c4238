//! Command-line surface
//!
//! - This module - clap argument definitions
//! - `subcommand` - The verb table and release command expansion
//! - `orchestration` - One end-to-end invocation

pub mod orchestration;
pub mod subcommand;

use clap::{ArgAction, Parser};

pub use subcommand::{Invocation, Subcommand, SUBCOMMANDS};

const VERSION_HELP: &str =
    "The version to use. major, minor, and patch (or M, m, p, ^, ~) increment semver; \
     anything else is used as the version string";

const BASE_HELP: &str = "Optional base branch";

const OPTIONS_HELP: &str = "Extra options passed through to git flow";

#[derive(Debug, Parser)]
#[command(
    name = "git-easyrelease",
    about = "A tool to simplify git-flow-release",
    version
)]
pub struct Args {
    #[arg(long, help = "Prints all available help")]
    pub all_help: bool,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Print the git flow commands without running them"
    )]
    pub dry_run: bool,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Equivalent to `git easyrelease quick 0.0.0`
    Init(BaseOnlyArgs),
    /// Starts and finishes a release (git flow release start <version> <base>; git flow release finish <version>)
    Quick(RequiredVersionArgs),
    /// Starts a release (git flow release start <version> <base>)
    Start(RequiredVersionArgs),
    /// Finishes a release (git flow release finish <version>)
    Finish(OptionalVersionArgs),
    /// Publishes a release branch (git flow release publish <version>)
    Publish(OptionalVersionArgs),
    /// Deletes a release branch (git flow release delete <version>)
    Delete(OptionalVersionArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct BaseOnlyArgs {
    #[arg(help = BASE_HELP)]
    pub base: Option<String>,

    #[arg(last = true, help = OPTIONS_HELP)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RequiredVersionArgs {
    #[arg(help = VERSION_HELP)]
    pub version: String,

    #[arg(help = BASE_HELP)]
    pub base: Option<String>,

    #[arg(last = true, help = OPTIONS_HELP)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OptionalVersionArgs {
    #[arg(help = VERSION_HELP)]
    pub version: Option<String>,

    #[arg(last = true, help = OPTIONS_HELP)]
    pub options: Vec<String>,
}

impl Command {
    /// The subcommand table entry and the arguments it was called with
    pub fn invocation(&self) -> (&'static Subcommand, Invocation) {
        match self {
            Command::Init(args) => (
                &subcommand::INIT,
                Invocation {
                    version: None,
                    base: args.base.clone(),
                    options: args.options.clone(),
                },
            ),
            Command::Quick(args) => (&subcommand::QUICK, args.to_invocation()),
            Command::Start(args) => (&subcommand::START, args.to_invocation()),
            Command::Finish(args) => (&subcommand::FINISH, args.to_invocation()),
            Command::Publish(args) => (&subcommand::PUBLISH, args.to_invocation()),
            Command::Delete(args) => (&subcommand::DELETE, args.to_invocation()),
        }
    }
}

impl RequiredVersionArgs {
    fn to_invocation(&self) -> Invocation {
        Invocation {
            version: Some(self.version.clone()),
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

impl OptionalVersionArgs {
    fn to_invocation(&self) -> Invocation {
        Invocation {
            version: self.version.clone(),
            base: None,
            options: self.options.clone(),
        }
    }
}
