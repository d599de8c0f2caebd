//! Plan command: preview the dependency installation order

use addon_core::{InstallationBackend, install_order};
use colored::Colorize;
use serde::Serialize;

use super::{print_warnings, resolve_addon};
use crate::context::AddonContext;
use crate::error::Result;

/// One step of the installation plan.
#[derive(Debug, Serialize)]
struct PlanStep<'a> {
    name: &'a str,
    alias: &'a str,
    depth: Option<usize>,
    action: &'static str,
}

/// Run the plan command
pub fn run_plan(ctx: &AddonContext, name: &str, json: bool) -> Result<()> {
    let root = ctx.manifest(name)?;
    let root_installed = ctx.backend.is_installed(&root.name)?;
    let result = resolve_addon(ctx, &root);

    let mut steps: Vec<PlanStep<'_>> = install_order(&result.dependencies)
        .into_iter()
        .filter(|dep| dep.name() != root.name)
        .map(|dep| PlanStep {
            name: dep.name(),
            alias: dep.manifest.display_name(),
            depth: Some(dep.depth),
            action: if dep.is_installed { "skip" } else { "install" },
        })
        .collect();
    steps.push(PlanStep {
        name: &root.name,
        alias: root.display_name(),
        depth: None,
        action: if root_installed { "skip" } else { "install" },
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    println!("Install plan for {}:", root.display_name().green().bold());
    println!();
    for (i, step) in steps.iter().enumerate() {
        let action = match step.action {
            "skip" => step.action.dimmed(),
            _ => step.action.green(),
        };
        let depth = step
            .depth
            .map_or_else(|| "root".to_string(), |d| format!("depth {d}"));
        println!(
            "  {:>2}. {:<8} {:<24} {}",
            i + 1,
            action,
            step.name.cyan(),
            depth.dimmed()
        );
    }

    if let Some(warning) = &root.warning {
        eprintln!("{} {}", "note:".cyan().bold(), warning);
    }
    print_warnings(&result);
    Ok(())
}
