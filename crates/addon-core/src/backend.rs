//! Installation backend abstraction.
//!
//! The backend performs the actual download, extraction and write of an
//! addon, and reports whether an addon is installed. This crate only decides
//! *what* to install and in which order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::manifest::AddonManifest;

/// Name of the addon index file kept in the game's addon directory.
pub const ADDONS_TXT: &str = "addons.txt";

/// Entry the game client writes to `addons.txt` that is not a real addon.
const UPDATE_NOTIFICATION_ENTRY: &str = "AddonUpdateNotification";

/// Trait for performing installs and querying installed status.
pub trait InstallationBackend: Send + Sync {
    /// Whether an addon named `name` is currently installed.
    fn is_installed(&self, name: &str) -> Result<bool>;

    /// Install `manifest` at `version`.
    ///
    /// `Ok(false)` and `Err(_)` are both install failures; the error form
    /// carries a reason such as a missing release.
    fn install(&self, manifest: &AddonManifest, version: &str) -> Result<bool>;
}

/// Read-only status backend over an addon directory's `addons.txt`.
///
/// Each non-empty line names one installed addon. A missing file means no
/// addons are installed. The file is read on the first status query and the
/// result is kept for the backend's lifetime; a failed read is retried.
/// [`install`](InstallationBackend::install) always returns
/// [`Error::ReadOnlyBackend`].
#[derive(Debug, Clone)]
pub struct AddonsTxt {
    path: PathBuf,
    installed: OnceLock<HashSet<String>>,
}

impl AddonsTxt {
    /// Backend for the `addons.txt` inside `addon_dir`.
    pub fn new(addon_dir: &Path) -> Self {
        Self {
            path: addon_dir.join(ADDONS_TXT),
            installed: OnceLock::new(),
        }
    }

    /// Path of the underlying `addons.txt`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the installed addon names in file order.
    pub fn installed_names(&self) -> Result<Vec<String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No addons.txt, nothing installed");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(parse_addons_txt(&content))
    }

    fn installed_set(&self) -> Result<&HashSet<String>> {
        if let Some(names) = self.installed.get() {
            return Ok(names);
        }
        let names: HashSet<String> = self.installed_names()?.into_iter().collect();
        Ok(self.installed.get_or_init(|| names))
    }
}

impl InstallationBackend for AddonsTxt {
    fn is_installed(&self, name: &str) -> Result<bool> {
        let names = self.installed_set().map_err(|e| Error::StatusUnavailable {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(names.contains(name))
    }

    fn install(&self, _manifest: &AddonManifest, _version: &str) -> Result<bool> {
        Err(Error::ReadOnlyBackend)
    }
}

fn parse_addons_txt(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != UPDATE_NOTIFICATION_ENTRY)
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}
