use crate::error::{EasyReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "easyrelease.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = "git-easyrelease.toml";

/// Represents the complete configuration for git-easyrelease.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,
}

/// Returns git-flow's own default release prefix.
fn default_prefix() -> String {
    "release/".to_string()
}

/// Settings applied to every `git flow release` invocation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Release prefix used when `gitflow.prefix.release` is not set
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Options appended to every release command (e.g. `["--showcommands"]`)
    #[serde(default)]
    pub default_options: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            prefix: default_prefix(),
            default_options: Vec::new(),
        }
    }
}

/// Candidate configuration file locations, most specific first.
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".").join(LOCAL_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(USER_CONFIG_FILE));
    }
    candidates
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `easyrelease.toml` in current directory
/// 3. `git-easyrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => config_candidates().into_iter().find(|p| p.exists()),
    };

    match path {
        Some(path) => parse_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)?;
    log::debug!("loading configuration from {}", path.display());

    toml::from_str(&config_str)
        .map_err(|e| EasyReleaseError::config(format!("{}: {}", path.display(), e)))
}
