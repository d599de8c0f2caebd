//! Shared test utilities for the addon manager workspace.
//!
//! This crate provides fixtures used across crate test suites. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`graph`]: manifest and catalog builders for dependency graphs
//! - [`backend`]: [`RecordingBackend`], an in-memory installation backend
//! - [`dir`]: [`TestAddonDir`], a temporary catalog/addon directory on disk

pub mod backend;
pub mod dir;
pub mod graph;

pub use backend::RecordingBackend;
pub use dir::TestAddonDir;
pub use graph::{OfflineDirectory, catalog, chain, manifest};
