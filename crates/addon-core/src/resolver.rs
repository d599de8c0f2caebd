//! Transitive dependency resolution for addons.
//!
//! [`GraphResolver`] walks an addon's declared dependency names depth-first,
//! in declaration order, looking each one up through the
//! [`ManifestDirectory`] and snapshotting its installed status through the
//! [`InstallationBackend`]. The result is a flat, name-deduplicated list of
//! every addon reachable from the root.
//!
//! Cycles, chains deeper than [`ResolverConfig::max_depth`] and failed
//! lookups never abort the walk. They end the affected branch and are
//! reported as [`ResolutionIssue`]s alongside whatever was resolved.
//!
//! Cycle detection is path-sensitive: every branch carries its own copy of
//! the names on the path from the root, so an addon may appear in sibling
//! subtrees but not twice on one ancestor chain.
//!
//! # Example
//!
//! ```
//! use addon_core::{AddonManifest, Catalog, GraphResolver, InstallationBackend, Result};
//!
//! struct NothingInstalled;
//! impl InstallationBackend for NothingInstalled {
//!     fn is_installed(&self, _name: &str) -> Result<bool> { Ok(false) }
//!     fn install(&self, _m: &AddonManifest, _v: &str) -> Result<bool> { Ok(true) }
//! }
//!
//! let catalog: Catalog = [
//!     AddonManifest::new("Y", ["Z"]),
//!     AddonManifest::new("Z", Vec::<String>::new()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let resolver = GraphResolver::new(&catalog, &NothingInstalled);
//! let result = resolver.resolve(&AddonManifest::new("X", ["Y"]));
//! assert_eq!(result.names(), vec!["Y", "Z"]);
//! assert_eq!(result.dependencies[1].depth, 1);
//! assert!(result.errors.is_empty());
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::backend::InstallationBackend;
use crate::catalog::ManifestDirectory;
use crate::config::ResolverConfig;
use crate::manifest::AddonManifest;

/// A resolved node of the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyInfo {
    pub manifest: AddonManifest,
    /// Installed status at discovery time. The orchestrator flips it to
    /// `true` after a successful install.
    pub is_installed: bool,
    /// Recursion depth at which this addon was first discovered. Direct
    /// dependencies of the root are at depth 0.
    pub depth: usize,
}

impl DependencyInfo {
    pub fn name(&self) -> &str {
        &self.manifest.name
    }
}

/// A non-fatal problem found while resolving dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionIssue {
    /// The addon already appears on its own ancestor path.
    CircularDependency { name: String },
    /// The chain reached the addon beyond the configured depth bound.
    DepthExceeded { name: String },
    /// The manifest or installed status of a declared dependency could not
    /// be obtained.
    LookupFailed { name: String, cause: String },
}

impl ResolutionIssue {
    /// Name of the addon the issue is about.
    pub fn name(&self) -> &str {
        match self {
            Self::CircularDependency { name }
            | Self::DepthExceeded { name }
            | Self::LookupFailed { name, .. } => name,
        }
    }
}

impl fmt::Display for ResolutionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CircularDependency { name } => {
                write!(f, "Circular dependency detected: {name}")
            }
            Self::DepthExceeded { name } => {
                write!(f, "Maximum dependency depth exceeded for: {name}")
            }
            Self::LookupFailed { name, cause } => {
                write!(f, "Failed to resolve dependency {name}: {cause}")
            }
        }
    }
}

impl Serialize for ResolutionIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Output of one resolution call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyResolutionResult {
    /// At most one entry per addon name, in discovery order.
    pub dependencies: Vec<DependencyInfo>,
    /// Diagnostics in traversal order.
    pub errors: Vec<ResolutionIssue>,
}

impl DependencyResolutionResult {
    /// True when resolution reported no issues.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of all resolved dependencies in discovery order.
    pub fn names(&self) -> Vec<&str> {
        self.dependencies.iter().map(DependencyInfo::name).collect()
    }

    /// Look up a resolved dependency by name.
    pub fn get(&self, name: &str) -> Option<&DependencyInfo> {
        self.dependencies.iter().find(|d| d.name() == name)
    }

    /// Dependencies that are not installed yet.
    pub fn pending(&self) -> impl Iterator<Item = &DependencyInfo> {
        self.dependencies.iter().filter(|d| !d.is_installed)
    }

    /// The diagnostics rendered as user-facing messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d.name() == name)
    }

    /// Append `other`, keeping the first entry seen for each name.
    fn merge(&mut self, other: Self) {
        for dep in other.dependencies {
            if !self.contains(dep.name()) {
                self.dependencies.push(dep);
            }
        }
        self.errors.extend(other.errors);
    }
}

/// Resolves the transitive dependency set of an addon.
///
/// The resolver holds no state between calls; every [`resolve`](Self::resolve)
/// walks the graph afresh.
pub struct GraphResolver<'a> {
    directory: &'a dyn ManifestDirectory,
    backend: &'a dyn InstallationBackend,
    config: ResolverConfig,
}

impl<'a> GraphResolver<'a> {
    /// Create a resolver with the default depth bound.
    pub fn new(directory: &'a dyn ManifestDirectory, backend: &'a dyn InstallationBackend) -> Self {
        Self {
            directory,
            backend,
            config: ResolverConfig::default(),
        }
    }

    /// Replace the resolver configuration.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every addon transitively required by `root`.
    ///
    /// Never fails: cycles, depth overflow and lookup failures are recorded
    /// in [`DependencyResolutionResult::errors`].
    pub fn resolve(&self, root: &AddonManifest) -> DependencyResolutionResult {
        let result = self.resolve_branch(root, &HashSet::new(), 0);
        tracing::debug!(
            addon = %root.name,
            dependencies = result.dependencies.len(),
            issues = result.errors.len(),
            "Resolved dependencies"
        );
        result
    }

    fn resolve_branch(
        &self,
        manifest: &AddonManifest,
        ancestors: &HashSet<String>,
        depth: usize,
    ) -> DependencyResolutionResult {
        let mut result = DependencyResolutionResult::default();

        if ancestors.contains(&manifest.name) {
            tracing::warn!(addon = %manifest.name, "Circular dependency detected");
            result.errors.push(ResolutionIssue::CircularDependency {
                name: manifest.name.clone(),
            });
            return result;
        }

        if depth > self.config.max_depth {
            tracing::warn!(
                addon = %manifest.name,
                max_depth = self.config.max_depth,
                "Maximum dependency depth exceeded"
            );
            result.errors.push(ResolutionIssue::DepthExceeded {
                name: manifest.name.clone(),
            });
            return result;
        }

        if !manifest.has_dependencies() {
            return result;
        }

        // Branch-local path; children each receive their own copy
        let mut path = ancestors.clone();
        path.insert(manifest.name.clone());

        for dep_name in &manifest.dependencies {
            let (dep_manifest, is_installed) = match self.lookup(dep_name) {
                Ok(found) => found,
                Err(cause) => {
                    tracing::warn!(dependency = %dep_name, %cause, "Failed to resolve dependency");
                    result.errors.push(ResolutionIssue::LookupFailed {
                        name: dep_name.clone(),
                        cause,
                    });
                    continue;
                }
            };

            tracing::debug!(
                parent = %manifest.name,
                dependency = %dep_name,
                depth,
                is_installed,
                "Discovered dependency"
            );

            if !result.contains(dep_name) {
                result.dependencies.push(DependencyInfo {
                    manifest: dep_manifest.clone(),
                    is_installed,
                    depth,
                });
            }

            let sub_result = self.resolve_branch(&dep_manifest, &path, depth + 1);
            result.merge(sub_result);
        }

        result
    }

    fn lookup(&self, name: &str) -> Result<(AddonManifest, bool), String> {
        let manifest = self
            .directory
            .get_manifest(name)
            .map_err(|e| e.to_string())?;
        let is_installed = self.backend.is_installed(name).map_err(|e| e.to_string())?;
        Ok((manifest, is_installed))
    }
}
