/// The active branch together with the git-flow release prefix it is judged against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBranch {
    pub name: String,
    pub prefix: String,
}

impl ReleaseBranch {
    /// Create a new release branch context
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        ReleaseBranch {
            name: name.into().trim().to_string(),
            prefix: prefix.into(),
        }
    }

    /// Check if this is a release branch (name starts with the prefix)
    pub fn is_release_branch(&self) -> bool {
        self.name.starts_with(&self.prefix)
    }

    /// Branch name with the release prefix removed, or `None` when this is
    /// not a release branch
    pub fn tidy(&self) -> Option<&str> {
        self.name.strip_prefix(self.prefix.as_str())
    }
}
