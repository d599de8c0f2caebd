//! Dependency resolution and installation ordering for Classic Addon Manager.
//!
//! This crate discovers the transitive dependencies of an addon, reports
//! cycles and runaway chains as non-fatal diagnostics, and installs the
//! discovered prerequisites deepest-first before the addon itself.
//!
//! Manifest lookup and installation are delegated to the
//! [`ManifestDirectory`] and [`InstallationBackend`] collaborators.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod policy;
pub mod resolver;

/// Version string requested from the backend when none is configured.
pub const LATEST_VERSION: &str = "latest";

/// Default bound on dependency recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 10;

pub use backend::{AddonsTxt, InstallationBackend};
pub use catalog::{Catalog, ManifestDirectory};
pub use config::{InstallConfig, ResolverConfig, Settings};
pub use error::{Error, Result};
pub use manifest::AddonManifest;
pub use orchestrator::{install_in_order, install_order};
pub use policy::{InstallOutcome, install_with_dependencies};
pub use resolver::{DependencyInfo, DependencyResolutionResult, GraphResolver, ResolutionIssue};
