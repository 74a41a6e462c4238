use crate::error::{EasyReleaseError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Keys that bump the patch component
pub const PATCH_KEYS: &[&str] = &["p", "patch", "~"];

/// Keys that bump the minor component
pub const MINOR_KEYS: &[&str] = &["m", "minor", "^"];

/// Keys that bump the major component
pub const MAJOR_KEYS: &[&str] = &["M", "major"];

static SEMVER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*v?\d+\.\d+\.\d+\s*$").expect("semver pattern is a valid regex")
});

/// Checks if a version string is a plain `major.minor.patch` semver,
/// optionally prefixed with `v`.
pub fn is_semver(version: &str) -> bool {
    SEMVER_PATTERN.is_match(version)
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Map a bump-alias key to its tier. Matching is exact and case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        if PATCH_KEYS.contains(&key) {
            Some(VersionBump::Patch)
        } else if MINOR_KEYS.contains(&key) {
            Some(VersionBump::Minor)
        } else if MAJOR_KEYS.contains(&key) {
            Some(VersionBump::Major)
        } else {
            None
        }
    }
}

/// Semantic version representation
///
/// The derived ordering compares `(major, minor, patch)` lexicographically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemVer {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string such as `"1.2.3"` or `" v1.2.3 "`.
    ///
    /// Anything [`is_semver`] rejects is an error rather than a silent `0.0.0`.
    pub fn from_version(version: &str) -> Result<Self> {
        if !is_semver(version) {
            return Err(EasyReleaseError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                version
            )));
        }

        let clean = version.trim();
        let clean = clean.strip_prefix('v').unwrap_or(clean);
        let parts: Vec<&str> = clean.split('.').collect();

        let parse_component = |name: &str, text: &str| {
            text.parse::<u64>().map_err(|_| {
                EasyReleaseError::version(format!("Invalid {} version: {}", name, text))
            })
        };

        Ok(SemVer {
            major: parse_component("major", parts[0])?,
            minor: parse_component("minor", parts[1])?,
            patch: parse_component("patch", parts[2])?,
        })
    }

    /// Compare against another version using release ordering signs:
    /// `-1` when `self` is greater, `1` when `self` is lesser, `0` when equal.
    ///
    /// A missing version always compares as lesser than `self`.
    pub fn compare(&self, other: Option<&SemVer>) -> i8 {
        match other {
            Some(other) => other.cmp(self) as i8,
            None => -1,
        }
    }

    /// True when `self` is greater than `other`
    pub fn greater(&self, other: Option<&SemVer>) -> bool {
        self.compare(other) == -1
    }

    /// True when `self` is less than `other`
    pub fn lesser(&self, other: Option<&SemVer>) -> bool {
        self.compare(other) == 1
    }

    /// True when `self` equals `other`
    pub fn equal(&self, other: Option<&SemVer>) -> bool {
        self.compare(other) == 0
    }

    /// Bump in place using a bump-alias key. Unknown keys leave the version
    /// untouched.
    pub fn bump(&mut self, key: &str) -> &mut Self {
        match VersionBump::from_key(key) {
            Some(bump_type) => self.bump_by(bump_type),
            None => self,
        }
    }

    /// Bump in place by tier, zeroing the lower components
    pub fn bump_by(&mut self, bump_type: VersionBump) -> &mut Self {
        match bump_type {
            VersionBump::Major => {
                self.major = self.major.saturating_add(1);
                self.minor = 0;
                self.patch = 0;
            }
            VersionBump::Minor => {
                self.minor = self.minor.saturating_add(1);
                self.patch = 0;
            }
            VersionBump::Patch => {
                self.patch = self.patch.saturating_add(1);
            }
        }
        self
    }

    /// Checks if a string is one of the bump-alias keys
    pub fn is_component(version: &str) -> bool {
        VersionBump::from_key(version).is_some()
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemVer {
    type Err = EasyReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        SemVer::from_version(s)
    }
}
