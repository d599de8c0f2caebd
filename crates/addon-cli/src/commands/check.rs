//! Check command: fail when dependency resolution reports issues

use colored::Colorize;

use super::{print_warnings, resolve_addon};
use crate::context::AddonContext;
use crate::error::{CliError, Result};

/// Run the check command
pub fn run_check(ctx: &AddonContext, name: &str) -> Result<()> {
    let root = ctx.manifest(name)?;
    let result = resolve_addon(ctx, &root);

    if result.is_clean() {
        println!(
            "{} {} resolves cleanly ({} dependencies)",
            "OK".green().bold(),
            name,
            result.dependencies.len()
        );
        return Ok(());
    }

    print_warnings(&result);
    Err(CliError::user(format!(
        "{} dependency issue(s) found for {}",
        result.errors.len(),
        name
    )))
}
