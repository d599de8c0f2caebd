//! Settings loaded from `addons.toml`.
//!
//! ```toml
//! catalog = "manifests.json"
//! addon_dir = "/games/wow/Interface/AddOns"
//!
//! [resolver]
//! max_depth = 10
//!
//! [install]
//! version = "latest"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{DEFAULT_MAX_DEPTH, LATEST_VERSION};

/// Canonical settings filename.
pub const SETTINGS_FILENAME: &str = "addons.toml";

/// Dependency resolver tuning.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Deepest recursion level that is still expanded. Direct dependencies
    /// of the root are at depth 0.
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Dependency installation settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct InstallConfig {
    /// Release requested from the backend for every dependency.
    pub version: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION.to_string(),
        }
    }
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// JSON file holding the addon catalog.
    pub catalog: Option<PathBuf>,
    /// Game addon directory containing `addons.txt`.
    pub addon_dir: Option<PathBuf>,
    pub resolver: ResolverConfig,
    pub install: InstallConfig,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }
        Self::read(path)
    }

    /// Read settings from a file that must exist.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SettingsNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
