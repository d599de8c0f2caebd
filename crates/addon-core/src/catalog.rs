//! Manifest lookup: the [`ManifestDirectory`] seam and an in-memory catalog.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::AddonManifest;

/// Source of addon manifests.
///
/// Implementations return the full catalog and resolve a single name to its
/// manifest. A missing name is reported as [`Error::ManifestNotFound`]; any
/// other error means the directory itself could not be consulted.
pub trait ManifestDirectory: Send + Sync {
    /// Return every known manifest.
    fn manifests(&self) -> Result<Vec<AddonManifest>>;

    /// Look up the manifest for `name`.
    ///
    /// The default implementation scans [`manifests`](Self::manifests).
    fn get_manifest(&self, name: &str) -> Result<AddonManifest> {
        self.manifests()?
            .into_iter()
            .find(|m| m.name == name)
            .ok_or_else(|| Error::ManifestNotFound(name.to_string()))
    }
}

/// In-memory catalog of addon manifests keyed by name.
///
/// Registering a name twice replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, AddonManifest>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the JSON array served by the addon API.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let manifests: Vec<AddonManifest> = serde_json::from_str(json)?;
        Ok(manifests.into_iter().collect())
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content).map_err(|source| Error::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), addons = catalog.len(), "Loaded addon catalog");
        Ok(catalog)
    }

    /// Register a manifest.
    pub fn register(&mut self, manifest: AddonManifest) {
        self.entries.insert(manifest.name.clone(), manifest);
    }

    /// Look up a manifest by name.
    pub fn get(&self, name: &str) -> Option<&AddonManifest> {
        self.entries.get(name)
    }

    /// All addon names (sorted).
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<AddonManifest> for Catalog {
    fn from_iter<T: IntoIterator<Item = AddonManifest>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for manifest in iter {
            catalog.register(manifest);
        }
        catalog
    }
}

impl ManifestDirectory for Catalog {
    fn manifests(&self) -> Result<Vec<AddonManifest>> {
        let mut manifests: Vec<AddonManifest> = self.entries.values().cloned().collect();
        manifests.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(manifests)
    }

    fn get_manifest(&self, name: &str) -> Result<AddonManifest> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::ManifestNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_from_json_array() {
        let json = r#"[
            {"name": "pfQuest", "dependencies": ["pfUI"]},
            {"name": "pfUI"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.names(), vec!["pfQuest", "pfUI"]);
        assert_eq!(catalog.get("pfQuest").unwrap().dependencies, vec!["pfUI"]);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut catalog = Catalog::new();
        catalog.register(AddonManifest::new("Atlas", ["A"]));
        catalog.register(AddonManifest::new("Atlas", ["B"]));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Atlas").unwrap().dependencies, vec!["B"]);
    }

    #[test]
    fn test_get_manifest_unknown_is_not_found() {
        let catalog = Catalog::new();
        let err = catalog.get_manifest("missing").unwrap_err();
        assert!(
            matches!(err, Error::ManifestNotFound(ref name) if name == "missing"),
            "expected ManifestNotFound, got: {err:?}"
        );
    }

    #[test]
    fn test_default_get_manifest_scans_catalog() {
        struct Listing(Vec<AddonManifest>);
        impl ManifestDirectory for Listing {
            fn manifests(&self) -> Result<Vec<AddonManifest>> {
                Ok(self.0.clone())
            }
        }

        let listing = Listing(vec![AddonManifest::new("Atlas", ["AtlasLoot"])]);
        assert_eq!(listing.get_manifest("Atlas").unwrap().name, "Atlas");
        assert!(matches!(
            listing.get_manifest("Other"),
            Err(Error::ManifestNotFound(_))
        ));
    }

    #[test]
    fn test_load_reports_parse_error_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not an array").unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(
            matches!(err, Error::CatalogParse { ref path, .. } if path == file.path()),
            "expected CatalogParse, got: {err:?}"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Bagnon"}}]"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.contains("Bagnon"));
    }
}
