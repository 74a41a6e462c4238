//! Domain logic - pure versioning and branch rules independent of git operations

pub mod branch;
pub mod version;

pub use branch::ReleaseBranch;
pub use version::{is_semver, SemVer, VersionBump, MAJOR_KEYS, MINOR_KEYS, PATCH_KEYS};
