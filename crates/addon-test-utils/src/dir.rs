//! [`TestAddonDir`]: a temporary workspace holding a catalog, an addon
//! directory and an optional settings file.

use std::fs;
use std::path::{Path, PathBuf};

use addon_core::AddonManifest;
use tempfile::TempDir;

/// Layout:
///
/// ```text
/// <root>/manifests.json      catalog
/// <root>/AddOns/addons.txt   installed addons
/// <root>/addons.toml         settings
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use addon_test_utils::{TestAddonDir, manifest};
///
/// let dir = TestAddonDir::new();
/// dir.write_catalog(&[manifest("pfQuest", &["pfUI"]), manifest("pfUI", &[])]);
/// dir.write_installed(&["pfUI"]);
/// ```
pub struct TestAddonDir {
    temp_dir: TempDir,
}

impl Default for TestAddonDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAddonDir {
    /// Create an empty temporary directory with an `AddOns/` folder.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("AddOns")).unwrap();
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root().join("manifests.json")
    }

    pub fn addon_dir(&self) -> PathBuf {
        self.root().join("AddOns")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root().join("addons.toml")
    }

    /// Write `manifests` as the JSON catalog.
    pub fn write_catalog(&self, manifests: &[AddonManifest]) {
        let json = serde_json::to_string_pretty(manifests).unwrap();
        fs::write(self.catalog_path(), json).unwrap();
    }

    /// Write `names` to `AddOns/addons.txt`, one per line.
    pub fn write_installed(&self, names: &[&str]) {
        let mut content = names.join("\n");
        content.push('\n');
        fs::write(self.addon_dir().join("addons.txt"), content).unwrap();
    }

    /// Write a settings file pointing at this directory's catalog and addon
    /// folder, followed by `extra` TOML.
    pub fn write_settings(&self, extra: &str) {
        let content = format!(
            "catalog = {:?}\naddon_dir = {:?}\n{extra}",
            self.catalog_path().to_string_lossy(),
            self.addon_dir().to_string_lossy(),
        );
        fs::write(self.settings_path(), content).unwrap();
    }
}
