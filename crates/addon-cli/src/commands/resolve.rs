//! Resolve command: list transitive dependencies

use colored::Colorize;

use super::{print_warnings, resolve_addon};
use crate::context::AddonContext;
use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(ctx: &AddonContext, name: &str, json: bool) -> Result<()> {
    let root = ctx.manifest(name)?;
    let result = resolve_addon(ctx, &root);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.dependencies.is_empty() {
        println!("{} has no dependencies.", name.green().bold());
    } else {
        println!(
            "{} depends on {} addon(s):",
            name.green().bold(),
            result.dependencies.len()
        );
        println!();
        for dep in &result.dependencies {
            let status = if dep.is_installed {
                "installed".green()
            } else {
                "not installed".yellow()
            };
            println!(
                "  {:<24} depth {:<3} {} {}",
                dep.name().cyan(),
                dep.depth,
                status,
                format!("({})", dep.manifest.display_name()).dimmed()
            );
        }
    }

    print_warnings(&result);
    Ok(())
}
