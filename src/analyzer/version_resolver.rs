use crate::boundary::ResolutionWarning;
use crate::domain::{is_semver, ReleaseBranch, SemVer};
use crate::error::{EasyReleaseError, Result};
use crate::git::Repository;
use std::fmt;

/// A version ready to be handed to `git flow release`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVersion {
    /// A semantic version, parsed or computed
    Semantic(SemVer),
    /// Anything else, passed through verbatim
    Literal(String),
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedVersion::Semantic(version) => write!(f, "{}", version),
            ResolvedVersion::Literal(text) => f.write_str(text),
        }
    }
}

impl From<SemVer> for ResolvedVersion {
    fn from(version: SemVer) -> Self {
        ResolvedVersion::Semantic(version)
    }
}

/// Resolves the version argument of a subcommand against repository state
pub struct VersionResolver<'a, R: Repository + ?Sized> {
    repo: &'a R,
    fallback_prefix: String,
}

impl<'a, R: Repository + ?Sized> VersionResolver<'a, R> {
    /// Create a resolver; `fallback_prefix` is used when the repository has
    /// no git-flow release prefix configured
    pub fn new(repo: &'a R, fallback_prefix: impl Into<String>) -> Self {
        VersionResolver {
            repo,
            fallback_prefix: fallback_prefix.into(),
        }
    }

    /// The release prefix in effect for this repository
    pub fn release_prefix(&self) -> Result<String> {
        match self.repo.release_prefix()? {
            Some(prefix) => Ok(prefix),
            None => {
                let warning = ResolutionWarning::ReleasePrefixUnset {
                    fallback: self.fallback_prefix.clone(),
                };
                log::warn!("{}", warning);
                Ok(self.fallback_prefix.clone())
            }
        }
    }

    /// The active branch judged against the release prefix
    pub fn release_branch(&self) -> Result<ReleaseBranch> {
        let prefix = self.release_prefix()?;
        let name = self.repo.active_branch()?;
        Ok(ReleaseBranch::new(name, prefix))
    }

    /// Version named by the active release branch, or `None` when the active
    /// branch is not a release branch
    pub fn active_branch_version(&self) -> Result<Option<ResolvedVersion>> {
        let branch = self.release_branch()?;

        let Some(tidy) = branch.tidy() else {
            log::debug!("'{}' is not a release branch", branch.name);
            return Ok(None);
        };

        if is_semver(tidy) {
            Ok(Some(SemVer::from_version(tidy)?.into()))
        } else {
            let warning = ResolutionWarning::UnparsableReleaseBranch {
                branch: branch.name.clone(),
            };
            log::warn!("{}", warning);
            Ok(Some(ResolvedVersion::Literal(tidy.to_string())))
        }
    }

    /// All tags that look like semantic versions, in repository order
    pub fn semver_tags(&self) -> Result<Vec<String>> {
        Ok(self
            .repo
            .tags()?
            .into_iter()
            .filter(|tag| is_semver(tag))
            .collect())
    }

    /// Either the active release branch's version or the greatest semver tag
    ///
    /// Falls back to `0.0.0` when neither exists.
    pub fn current_version(&self) -> Result<SemVer> {
        if let Some(ResolvedVersion::Semantic(active)) = self.active_branch_version()? {
            return Ok(active);
        }

        let mut max_version: Option<SemVer> = None;
        for tag in self.semver_tags()? {
            let version = match SemVer::from_version(&tag) {
                Ok(version) => version,
                Err(e) => {
                    let warning = ResolutionWarning::UnusableTag {
                        tag,
                        reason: e.to_string(),
                    };
                    log::warn!("{}", warning);
                    continue;
                }
            };
            if version.greater(max_version.as_ref()) {
                max_version = Some(version);
            }
        }

        match max_version {
            Some(version) => Ok(version),
            None => {
                let warning = ResolutionWarning::NoSemverTags {
                    tag_count: self.repo.tags()?.len(),
                };
                log::warn!("{}", warning);
                Ok(SemVer::default())
            }
        }
    }

    /// Turn a subcommand's version argument into the version to release
    ///
    /// * no input: the active release branch's version, or
    ///   [`EasyReleaseError::VersionUnavailable`]
    /// * a semver string: that version
    /// * a bump-alias key: the current version, bumped
    /// * anything else: passed through unchanged
    pub fn process_version(&self, input: Option<&str>) -> Result<ResolvedVersion> {
        let input = match input {
            Some(text) if !text.is_empty() => text,
            _ => {
                return self
                    .active_branch_version()?
                    .ok_or(EasyReleaseError::VersionUnavailable)
            }
        };

        if is_semver(input) {
            return Ok(SemVer::from_version(input)?.into());
        }

        if SemVer::is_component(input) {
            let mut current = self.current_version()?;
            current.bump(input);
            return Ok(current.into());
        }

        Ok(ResolvedVersion::Literal(input.to_string()))
    }
}
