use std::path::PathBuf;

/// Errors that can occur while resolving or installing addons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No manifest with this name exists in the directory.
    #[error("addon not found: {0}")]
    ManifestNotFound(String),

    /// The catalog file could not be parsed as a JSON array of manifests.
    #[error("failed to parse addon catalog at {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// An explicitly requested settings file does not exist.
    #[error("settings file not found: {0}")]
    SettingsNotFound(PathBuf),

    /// Failed to parse the settings TOML.
    #[error("failed to parse settings: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error reading catalog, settings or status files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The installed status of an addon could not be determined.
    #[error("cannot determine whether '{name}' is installed: {reason}")]
    StatusUnavailable { name: String, reason: String },

    /// The backend raised while installing an addon.
    #[error("failed to install '{name}': {reason}")]
    InstallFailed { name: String, reason: String },

    /// The backend only reports status and cannot install.
    #[error("installation is not supported by this backend")]
    ReadOnlyBackend,
}

pub type Result<T> = std::result::Result<T, Error>;
