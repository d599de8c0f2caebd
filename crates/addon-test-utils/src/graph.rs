//! Builders for dependency graphs.

use addon_core::{AddonManifest, Catalog, Error, ManifestDirectory, Result};

/// A manifest named `name` depending on `deps`, aliased `"<name> Alias"`.
pub fn manifest(name: &str, deps: &[&str]) -> AddonManifest {
    let mut manifest = AddonManifest::new(name, deps.iter().copied());
    manifest.alias = format!("{name} Alias");
    manifest
}

/// A catalog from `(name, dependencies)` pairs.
///
/// ```
/// use addon_test_utils::catalog;
///
/// let catalog = catalog(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"]), ("D", &[])]);
/// assert_eq!(catalog.len(), 4);
/// ```
pub fn catalog(entries: &[(&str, &[&str])]) -> Catalog {
    entries
        .iter()
        .map(|(name, deps)| manifest(name, deps))
        .collect()
}

/// A linear chain `names[0] -> names[1] -> ... -> names[n-1]`.
pub fn chain(names: &[&str]) -> Catalog {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| match names.get(i + 1) {
            Some(next) => manifest(name, &[*next]),
            None => manifest(name, &[]),
        })
        .collect()
}

/// A manifest directory that cannot be reached.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineDirectory;

impl ManifestDirectory for OfflineDirectory {
    fn manifests(&self) -> Result<Vec<AddonManifest>> {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "addon directory unavailable",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_links_names() {
        let catalog = chain(&["A", "B", "C"]);
        assert_eq!(catalog.get("A").unwrap().dependencies, vec!["B"]);
        assert_eq!(catalog.get("B").unwrap().dependencies, vec!["C"]);
        assert!(catalog.get("C").unwrap().dependencies.is_empty());
    }

    #[test]
    fn test_offline_directory_fails_lookup() {
        assert!(OfflineDirectory.get_manifest("A").is_err());
    }
}
