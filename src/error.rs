use thiserror::Error;

/// Exit status used for internal failures that are not usage errors.
pub const EXIT_INTERNAL: i32 = 70;

/// Exit status used when a required external tool is not installed.
pub const EXIT_TOOL_MISSING: i32 = 127;

/// Exit status used for invalid command-line input.
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for git-easyrelease operations
#[derive(Error, Debug)]
pub enum EasyReleaseError {
    #[error("git-flow is not installed or not on PATH")]
    GitFlowMissing,

    #[error("Version was not passed in and the repo is not on a release branch")]
    VersionUnavailable,

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid base branch '{base}': not a known branch")]
    InvalidBase { base: String },

    #[error(
        "Release command `{command}` failed with exit code {code}{}",
        stderr_detail(.stderr)
    )]
    ReleaseCommand {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn stderr_detail(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Convenience type alias for Results in git-easyrelease
pub type Result<T> = std::result::Result<T, EasyReleaseError>;

impl EasyReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        EasyReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        EasyReleaseError::Version(msg.into())
    }

    /// Process exit status to report for this error.
    ///
    /// A failed release command hands back the external command's own code so
    /// callers scripting around the tool see what git-flow reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            EasyReleaseError::ReleaseCommand { code, .. } => *code,
            EasyReleaseError::GitFlowMissing => EXIT_TOOL_MISSING,
            EasyReleaseError::InvalidBase { .. } => EXIT_USAGE,
            _ => EXIT_INTERNAL,
        }
    }
}
