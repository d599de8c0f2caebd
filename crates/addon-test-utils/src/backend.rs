//! [`RecordingBackend`]: an in-memory installation backend for tests.

use std::collections::HashSet;
use std::sync::Mutex;

use addon_core::{AddonManifest, Error, InstallationBackend, Result};

#[derive(Debug, Default)]
struct State {
    installed: HashSet<String>,
    installs: Vec<(String, String)>,
    status_queries: usize,
}

/// Installation backend that records every call.
///
/// Successful installs mark the addon installed, so later status queries see
/// them. Failures are scripted per name: [`refusing`](Self::refusing) returns
/// `Ok(false)`, [`raising`](Self::raising) returns an error, and
/// [`with_status_failure`](Self::with_status_failure) makes `is_installed`
/// fail.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    state: Mutex<State>,
    refuse: HashSet<String>,
    raise: HashSet<String>,
    status_failures: HashSet<String>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `names` as already installed.
    pub fn with_installed<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock()
            .installed
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Installing `name` returns `Ok(false)`.
    pub fn refusing(mut self, name: &str) -> Self {
        self.refuse.insert(name.to_string());
        self
    }

    /// Installing `name` returns an error.
    pub fn raising(mut self, name: &str) -> Self {
        self.raise.insert(name.to_string());
        self
    }

    /// Querying the status of `name` returns an error.
    pub fn with_status_failure(mut self, name: &str) -> Self {
        self.status_failures.insert(name.to_string());
        self
    }

    /// Names passed to `install`, in call order.
    pub fn install_calls(&self) -> Vec<String> {
        self.lock()
            .installs
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Versions passed to `install`, in call order.
    pub fn install_versions(&self) -> Vec<String> {
        self.lock()
            .installs
            .iter()
            .map(|(_, version)| version.clone())
            .collect()
    }

    /// Number of `is_installed` calls so far.
    pub fn status_queries(&self) -> usize {
        self.lock().status_queries
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl InstallationBackend for RecordingBackend {
    fn is_installed(&self, name: &str) -> Result<bool> {
        let mut state = self.lock();
        state.status_queries += 1;
        if self.status_failures.contains(name) {
            return Err(Error::StatusUnavailable {
                name: name.to_string(),
                reason: "status index unreadable".to_string(),
            });
        }
        Ok(state.installed.contains(name))
    }

    fn install(&self, manifest: &AddonManifest, version: &str) -> Result<bool> {
        let mut state = self.lock();
        state
            .installs
            .push((manifest.name.clone(), version.to_string()));

        if self.raise.contains(&manifest.name) {
            return Err(Error::InstallFailed {
                name: manifest.name.clone(),
                reason: format!("no release found for version {version}"),
            });
        }
        if self.refuse.contains(&manifest.name) {
            return Ok(false);
        }

        state.installed.insert(manifest.name.clone());
        Ok(true)
    }
}
