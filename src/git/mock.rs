use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone)]
pub struct MockRepository {
    active_branch: String,
    release_prefix: Option<String>,
    branches: Vec<String>,
    tags: Vec<String>,
}

impl MockRepository {
    /// Create a new mock repository sitting on `develop` with the default
    /// git-flow release prefix
    pub fn new() -> Self {
        MockRepository {
            active_branch: "develop".to_string(),
            release_prefix: Some("release/".to_string()),
            branches: vec!["develop".to_string(), "master".to_string()],
            tags: Vec::new(),
        }
    }

    /// Set the checked-out branch
    pub fn with_active_branch(mut self, branch: impl Into<String>) -> Self {
        let branch = branch.into();
        if !self.branches.contains(&branch) {
            self.branches.push(branch.clone());
        }
        self.active_branch = branch;
        self
    }

    /// Set or clear the git-flow release prefix
    pub fn with_release_prefix(mut self, prefix: Option<&str>) -> Self {
        self.release_prefix = prefix.map(str::to_string);
        self
    }

    /// Add a branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branches.push(branch.into());
        self
    }

    /// Add tags in the given order
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn active_branch(&self) -> Result<String> {
        Ok(self.active_branch.clone())
    }

    fn release_prefix(&self) -> Result<Option<String>> {
        Ok(self.release_prefix.clone())
    }

    fn branches(&self) -> Result<Vec<String>> {
        Ok(self.branches.clone())
    }

    fn tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}
