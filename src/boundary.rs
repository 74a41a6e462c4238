use std::fmt;

/// Warnings raised while resolving a version from repository state.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionWarning {
    /// `gitflow.prefix.release` is not set; the configured fallback is used
    ReleasePrefixUnset { fallback: String },
    /// No tag looks like a semantic version, so bumping starts from 0.0.0
    NoSemverTags { tag_count: usize },
    /// The active release branch name is not a semantic version
    UnparsableReleaseBranch { branch: String },
    /// A tag looks like a semantic version but cannot be parsed into one
    UnusableTag { tag: String, reason: String },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::ReleasePrefixUnset { fallback } => {
                write!(
                    f,
                    "gitflow.prefix.release is not set (run `git flow init`?); assuming '{}'",
                    fallback
                )
            }
            ResolutionWarning::NoSemverTags { tag_count } => {
                write!(
                    f,
                    "None of the {} tags is a semantic version; starting from 0.0.0",
                    tag_count
                )
            }
            ResolutionWarning::UnparsableReleaseBranch { branch } => {
                write!(
                    f,
                    "Release branch '{}' does not name a semantic version",
                    branch
                )
            }
            ResolutionWarning::UnusableTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
        }
    }
}
