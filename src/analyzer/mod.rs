//! Resolution engine turning version arguments into release versions

pub mod version_resolver;

pub use version_resolver::{ResolvedVersion, VersionResolver};
