//! External git-flow invocation
//!
//! - `runner` - The subprocess boundary and its implementations
//! - `release` - Building and running `git flow release` commands

pub mod release;
pub mod runner;

pub use release::{ReleaseAction, ReleaseCommand};
pub use runner::{
    exit_status_code, git_flow_available, CommandOutput, CommandRunner, DryRunRunner,
    RecordingRunner, SystemRunner, GIT_FLOW_EXECUTABLE,
};
