//! Repository information abstraction layer
//!
//! This module provides a trait-based abstraction over the repository state
//! git-easyrelease needs to read: the active branch, the git-flow release
//! prefix, the known branches and the tags.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Version resolution depends on the [Repository] trait rather than a
//! concrete implementation, so it can be exercised without a real repository.
//!
//! ```rust
//! # use git_easyrelease::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let branch = repo.active_branch()?;
//! let tags = repo.tags()?;
//! println!("on {} with {} tags", branch, tags.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Git config key holding the git-flow release branch prefix
pub const RELEASE_PREFIX_KEY: &str = "gitflow.prefix.release";

/// Read-only view of the repository state used to resolve versions
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::EasyReleaseError] variants.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation
pub trait Repository {
    /// Short name of the checked-out branch (e.g. "develop", "release/1.2.0")
    ///
    /// A detached HEAD is reported as `"HEAD"`, matching
    /// `git rev-parse --abbrev-ref HEAD`.
    fn active_branch(&self) -> Result<String>;

    /// The configured git-flow release prefix
    ///
    /// # Returns
    /// * `Ok(Some(prefix))` - Value of `gitflow.prefix.release`
    /// * `Ok(None)` - The key is not set (git-flow not initialised)
    /// * `Err` - If the configuration cannot be read
    fn release_prefix(&self) -> Result<Option<String>>;

    /// Short names of all local and remote-tracking branches
    fn branches(&self) -> Result<Vec<String>>;

    /// Names of all tags in the repository
    fn tags(&self) -> Result<Vec<String>>;
}
