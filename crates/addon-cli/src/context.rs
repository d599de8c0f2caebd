//! Command context: settings, catalog and installed-status backend
//!
//! Settings come from `addons.toml` (or `--config`); the `--catalog`,
//! `--addon-dir` and `--max-depth` flags take precedence over the file.

use std::path::{Path, PathBuf};

use addon_core::config::SETTINGS_FILENAME;
use addon_core::{AddonManifest, AddonsTxt, Catalog, ManifestDirectory, Settings};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Everything a command needs to resolve an addon.
pub struct AddonContext {
    pub settings: Settings,
    pub catalog: Catalog,
    pub backend: AddonsTxt,
}

impl AddonContext {
    /// Build the context from command-line flags, relative to `cwd`.
    pub fn load(cli: &Cli, cwd: &Path) -> Result<Self> {
        // Only the implicit ./addons.toml may be absent
        let mut settings = match &cli.config {
            Some(path) => Settings::read(&absolute(cwd, path))?,
            None => Settings::load(&cwd.join(SETTINGS_FILENAME))?,
        };

        if let Some(catalog) = &cli.catalog {
            settings.catalog = Some(catalog.clone());
        }
        if let Some(addon_dir) = &cli.addon_dir {
            settings.addon_dir = Some(addon_dir.clone());
        }
        if let Some(max_depth) = cli.max_depth {
            settings.resolver.max_depth = max_depth;
        }

        let catalog_path = settings.catalog.clone().ok_or_else(|| {
            CliError::user(format!(
                "no addon catalog configured; pass --catalog or set `catalog` in {SETTINGS_FILENAME}"
            ))
        })?;
        let catalog = Catalog::load(&absolute(cwd, &catalog_path))?;

        let addon_dir = settings
            .addon_dir
            .as_deref()
            .map_or_else(|| cwd.to_path_buf(), |dir| absolute(cwd, dir));
        let backend = AddonsTxt::new(&addon_dir);

        tracing::debug!(
            catalog = %catalog_path.display(),
            addons_txt = %backend.path().display(),
            max_depth = settings.resolver.max_depth,
            "Loaded addon context"
        );

        Ok(Self {
            settings,
            catalog,
            backend,
        })
    }

    /// Look up the addon a command was asked about.
    pub fn manifest(&self, name: &str) -> Result<AddonManifest> {
        Ok(self.catalog.get_manifest(name)?)
    }
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
