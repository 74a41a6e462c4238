use crate::error::{EasyReleaseError, Result};
use crate::git::RELEASE_PREFIX_KEY;
use git2::{BranchType, ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn active_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().unwrap_or("HEAD").to_string()),
            Ok(_) => Ok("HEAD".to_string()),
            // A freshly initialised repository has HEAD pointing at a branch
            // with no commits yet.
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                let target = head.symbolic_target().ok_or_else(|| {
                    EasyReleaseError::Git(git2::Error::from_str("HEAD has no symbolic target"))
                })?;
                Ok(target.trim_start_matches("refs/heads/").to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn release_prefix(&self) -> Result<Option<String>> {
        let mut config = self.repo.config()?;
        let snapshot = config.snapshot()?;

        match snapshot.get_string(RELEASE_PREFIX_KEY) {
            Ok(prefix) => Ok(Some(prefix.trim().to_string())),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(EasyReleaseError::config(format!(
                "Cannot read '{}': {}",
                RELEASE_PREFIX_KEY, e
            ))),
        }
    }

    fn branches(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in self.repo.branches(None)? {
            let (branch, branch_type) = entry?;
            if let Some(name) = branch.name()? {
                // origin/HEAD is a symbolic ref, not a branch anyone can base on
                if branch_type == BranchType::Remote && name.ends_with("/HEAD") {
                    continue;
                }
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    fn tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}
