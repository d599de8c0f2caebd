//! Sequential, best-effort installation of resolved dependencies.
//!
//! Dependencies are installed deepest-first: an addon discovered deeper in
//! the resolution walk is treated as a prerequisite of the shallower ones.
//! This is a heuristic ordering, not a topological sort of the dependency
//! edges.
//!
//! Each install is attempted exactly once and completes before the next one
//! starts. A failed install is recorded and the batch carries on.

use std::cmp::Reverse;

use crate::backend::InstallationBackend;
use crate::resolver::DependencyInfo;

/// Order `dependencies` for installation: stable sort by depth, deepest first.
pub fn install_order(dependencies: &[DependencyInfo]) -> Vec<&DependencyInfo> {
    ordered_indices(dependencies)
        .into_iter()
        .map(|i| &dependencies[i])
        .collect()
}

/// Indices of `dependencies` in installation order.
fn ordered_indices(dependencies: &[DependencyInfo]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..dependencies.len()).collect();
    order.sort_by_key(|&i| Reverse(dependencies[i].depth));
    order
}

/// Install every dependency that is not installed yet, deepest first.
///
/// Already-installed entries are skipped without calling the backend. On
/// success the entry's `is_installed` flag is set so callers can report
/// per-dependency results. `Ok(false)` and `Err(_)` from the backend are both
/// failures; every remaining dependency is still attempted.
///
/// Returns the names that failed, in attempt order. An empty list means every
/// dependency is now installed.
pub fn install_in_order(
    backend: &dyn InstallationBackend,
    dependencies: &mut [DependencyInfo],
    version: &str,
) -> Vec<String> {
    let order = ordered_indices(dependencies);
    let mut failed = Vec::new();

    for index in order {
        let dep = &mut dependencies[index];
        let alias = dep.manifest.display_name().to_string();

        if dep.is_installed {
            tracing::info!(dependency = %alias, depth = dep.depth, "Dependency already installed");
            continue;
        }

        tracing::info!(dependency = %alias, depth = dep.depth, "Installing dependency");
        match backend.install(&dep.manifest, version) {
            Ok(true) => {
                dep.is_installed = true;
                tracing::info!(dependency = %alias, "Installed dependency");
            }
            Ok(false) => {
                tracing::error!(dependency = %alias, "Failed to install dependency");
                failed.push(dep.manifest.name.clone());
            }
            Err(e) => {
                tracing::error!(dependency = %alias, error = %e, "Error installing dependency");
                failed.push(dep.manifest.name.clone());
            }
        }
    }

    failed
}
