//! Installing an addon together with its prerequisites.
//!
//! The root addon is only installed once every dependency is installed. If
//! any dependency fails, the root is left alone and the failed dependencies
//! are reported by their display names.

use crate::backend::InstallationBackend;
use crate::catalog::ManifestDirectory;
use crate::config::Settings;
use crate::error::Result;
use crate::manifest::AddonManifest;
use crate::orchestrator::install_in_order;
use crate::resolver::{GraphResolver, ResolutionIssue};

/// What happened when installing an addon with its dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The root addon was already installed; nothing was done.
    AlreadyInstalled,
    /// Dependencies and root are installed.
    Installed {
        /// Names of dependencies installed during this run.
        installed_dependencies: Vec<String>,
        warnings: Vec<ResolutionIssue>,
    },
    /// At least one dependency failed, so the root was not installed.
    DependenciesFailed {
        /// Display names of the failed dependencies, in attempt order.
        failed: Vec<String>,
        warnings: Vec<ResolutionIssue>,
    },
    /// Every dependency is installed but the root itself failed.
    RootFailed {
        reason: String,
        warnings: Vec<ResolutionIssue>,
    },
}

impl InstallOutcome {
    /// Whether the root addon ends up installed.
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::AlreadyInstalled | Self::Installed { .. })
    }

    /// Resolution issues to surface as non-blocking warnings.
    pub fn warnings(&self) -> &[ResolutionIssue] {
        match self {
            Self::AlreadyInstalled => &[],
            Self::Installed { warnings, .. }
            | Self::DependenciesFailed { warnings, .. }
            | Self::RootFailed { warnings, .. } => warnings,
        }
    }
}

/// Resolve `root`'s dependencies, install them deepest-first, then install
/// `root`.
///
/// Resolution issues never block the install; they are returned as warnings.
/// A root that shows up in its own dependency list through a cycle is only
/// installed once, as the root.
///
/// # Errors
///
/// Fails only if the root's own installed status cannot be determined.
pub fn install_with_dependencies(
    directory: &dyn ManifestDirectory,
    backend: &dyn InstallationBackend,
    root: &AddonManifest,
    settings: &Settings,
) -> Result<InstallOutcome> {
    if backend.is_installed(&root.name)? {
        tracing::info!(addon = %root.display_name(), "Addon already installed");
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    let resolution = GraphResolver::new(directory, backend)
        .with_config(settings.resolver)
        .resolve(root);
    let warnings = resolution.errors;
    let mut dependencies = resolution.dependencies;
    dependencies.retain(|dep| dep.name() != root.name);

    let pending: Vec<String> = dependencies
        .iter()
        .filter(|dep| !dep.is_installed)
        .map(|dep| dep.name().to_string())
        .collect();

    if pending.is_empty() {
        tracing::debug!(addon = %root.display_name(), "All dependencies already installed");
    } else {
        let failed = install_in_order(backend, &mut dependencies, &settings.install.version);
        if !failed.is_empty() {
            let failed = failed
                .iter()
                .map(|name| {
                    dependencies
                        .iter()
                        .find(|dep| dep.name() == name)
                        .map_or_else(|| name.clone(), |dep| dep.manifest.display_name().to_string())
                })
                .collect();
            tracing::warn!(addon = %root.display_name(), "Dependency installation failed, skipping addon");
            return Ok(InstallOutcome::DependenciesFailed { failed, warnings });
        }
    }

    let reason = match backend.install(root, &settings.install.version) {
        Ok(true) => {
            tracing::info!(addon = %root.display_name(), "Addon installed");
            return Ok(InstallOutcome::Installed {
                installed_dependencies: pending,
                warnings,
            });
        }
        Ok(false) => format!("failed to install {}", root.display_name()),
        Err(e) => e.to_string(),
    };

    tracing::error!(addon = %root.display_name(), %reason, "Addon installation failed");
    Ok(InstallOutcome::RootFailed { reason, warnings })
}
