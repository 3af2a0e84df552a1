use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::Deserialize;

use crate::core::file_scanner::compile_pattern;

pub const CONFIG_FILE_NAME: &str = ".availrc.json";

/// Extension of the files the scanner picks up.
pub const SOURCE_EXTENSION: &str = "swift";

/// Directory names never descended into, besides hidden directories.
pub const SKIPPED_DIR_NAMES: &[&str] = &["build", "DerivedData"];

pub const TEST_FILE_PATTERNS: &[&str] = &["*Test*.swift", "**/Tests/**", "**/test/**"];

pub const DEFAULT_IOS_VERSION: &str = "15.0";
pub const DEFAULT_MACOS_VERSION: &str = "12.0";
pub const DEFAULT_WATCHOS_VERSION: &str = "8.0";

/// Optional per-project settings, read from `.availrc.json`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub ios_version: Option<String>,
    #[serde(default)]
    pub macos_version: Option<String>,
    #[serde(default)]
    pub watchos_version: Option<String>,
    #[serde(default)]
    pub include_tests: bool,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `exclude` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.exclude {
            compile_pattern(pattern)
                .with_context(|| format!("Invalid glob pattern in 'exclude': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

/// Look for the config file from `start_dir` upwards, stopping at the
/// repository root (a directory containing `.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = fs::canonicalize(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
