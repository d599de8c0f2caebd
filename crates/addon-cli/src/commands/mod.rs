//! Command implementations for addon-cli

pub mod check;
pub mod plan;
pub mod resolve;

pub use check::run_check;
pub use plan::run_plan;
pub use resolve::run_resolve;

use addon_core::{AddonManifest, DependencyResolutionResult, GraphResolver};
use colored::Colorize;

use crate::context::AddonContext;

/// Resolve `root` against the context's catalog and installed addons.
fn resolve_addon(ctx: &AddonContext, root: &AddonManifest) -> DependencyResolutionResult {
    GraphResolver::new(&ctx.catalog, &ctx.backend)
        .with_config(ctx.settings.resolver)
        .resolve(root)
}

/// Print resolution issues as non-blocking warnings on stderr.
fn print_warnings(result: &DependencyResolutionResult) {
    for message in result.error_messages() {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
}
