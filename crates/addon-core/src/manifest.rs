//! Addon manifests as published in the remote addon catalog.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "name": "pfQuest",
//!   "alias": "pfQuest",
//!   "author": "shagu",
//!   "description": "A simple database and quest helper",
//!   "dependencies": ["pfQuest-turtle"],
//!   "repo": "https://github.com/shagu/pfQuest",
//!   "branch": "master",
//!   "tags": ["quest"],
//!   "downloads": 1200
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Immutable descriptor of an installable addon.
///
/// `name` is the stable key; `dependencies` holds addon names that are
/// resolved lazily through a [`ManifestDirectory`](crate::ManifestDirectory).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddonManifest {
    /// Globally unique addon name.
    pub name: String,
    /// Human-readable name shown to users.
    #[serde(default)]
    pub alias: String,
    /// Names of the addons this one requires, in declaration order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    /// Source repository URL.
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub like_percentage: Option<i8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kofi: Option<String>,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
    /// Caution shown before installing, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl AddonManifest {
    /// Create a manifest with just a name and its dependency names.
    pub fn new<I, S>(name: impl Into<String>, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The alias, or the name when no alias is set.
    pub fn display_name(&self) -> &str {
        if self.alias.is_empty() {
            &self.name
        } else {
            &self.alias
        }
    }

    /// Whether this addon declares any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let json = r#"{
            "name": "pfQuest",
            "alias": "pfQuest (Turtle)",
            "dependencies": ["pfUI"],
            "description": "Quest helper",
            "author": "shagu",
            "repo": "https://github.com/shagu/pfQuest",
            "branch": "master",
            "tags": ["quest"],
            "downloads": 42,
            "like_percentage": 97,
            "added_at": "2024-05-01T12:00:00Z",
            "warning": "Requires a client patch"
        }"#;
        let manifest: AddonManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.name, "pfQuest");
        assert_eq!(manifest.dependencies, vec!["pfUI"]);
        assert_eq!(manifest.like_percentage, Some(97));
        assert!(manifest.added_at.is_some());
        assert_eq!(manifest.warning.as_deref(), Some("Requires a client patch"));
        assert!(manifest.kofi.is_none());
    }

    #[test]
    fn test_null_dependencies_are_empty() {
        let json = r#"{"name": "Bagnon", "dependencies": null, "tags": null}"#;
        let manifest: AddonManifest = serde_json::from_str(json).unwrap();
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.tags.is_empty());
        assert!(!manifest.has_dependencies());
    }

    #[test]
    fn test_missing_fields_default() {
        let manifest: AddonManifest = serde_json::from_str(r#"{"name": "Atlas"}"#).unwrap();
        assert_eq!(manifest.alias, "");
        assert_eq!(manifest.downloads, 0);
        assert!(manifest.added_at.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        let mut manifest = AddonManifest::new("Atlas", Vec::<String>::new());
        assert_eq!(manifest.display_name(), "Atlas");
        manifest.alias = String::new();
        assert_eq!(manifest.display_name(), "Atlas");
        manifest.alias = "Atlas Loot".to_string();
        assert_eq!(manifest.display_name(), "Atlas Loot");
    }
}
