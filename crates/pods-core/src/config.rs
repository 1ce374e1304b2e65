//! Installer configuration
//!
//! Everything the installer needs is resolved up front by the caller:
//! explicit overrides first, then an optional `flutter-pods.toml` in the
//! native project directory, then defaults derived from the project layout.

use pods_fs::{ConfigStore, NormalizedPath, PodPath};
use serde::Deserialize;

use crate::manifest::DEFAULT_SEPARATOR;
use crate::{Error, Result};

/// On-disk configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Flutter application root; relative paths resolve against the file's directory
    pub app_root: Option<String>,
    /// Manifest key/value separator
    pub separator: Option<String>,
}

/// Values supplied on the command line (or by an embedding program).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub app_root: Option<NormalizedPath>,
    pub separator: Option<String>,
    pub dry_run: bool,
}

/// Fully resolved installer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// Flutter application root holding `.flutter-plugins`
    pub app_root: NormalizedPath,
    /// Native project directory that receives `.symlinks/`
    pub project_dir: NormalizedPath,
    pub separator: String,
    /// Compute links and declarations without touching the filesystem
    pub dry_run: bool,
}

impl InstallConfig {
    pub fn new(app_root: impl Into<NormalizedPath>, project_dir: impl Into<NormalizedPath>) -> Self {
        Self {
            app_root: app_root.into(),
            project_dir: project_dir.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
            dry_run: false,
        }
    }

    /// Resolve configuration for `project_dir`.
    ///
    /// `config_path` names an explicit config file, which must exist.
    /// Without one, `<project_dir>/flutter-pods.toml` is read if present.
    pub fn load(
        project_dir: NormalizedPath,
        config_path: Option<NormalizedPath>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let store = ConfigStore::new();
        let (file, file_path) = match config_path {
            Some(path) => (Some(store.load::<ConfigFile>(&path)?), path),
            None => {
                let path = project_dir.join(PodPath::ConfigFile.as_str());
                (store.load_optional::<ConfigFile>(&path)?, path)
            }
        };
        let file = file.unwrap_or_default();

        let app_root = match (overrides.app_root, file.app_root) {
            (Some(root), _) => root,
            (None, Some(root)) => {
                let base = file_path.parent().unwrap_or_else(|| project_dir.clone());
                NormalizedPath::new(root).resolve_against(&base)
            }
            (None, None) => Self::default_app_root(&project_dir),
        };

        let separator = overrides
            .separator
            .or(file.separator)
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        if separator.is_empty() {
            return Err(Error::InvalidSeparator { separator });
        }

        tracing::debug!(
            app_root = %app_root,
            project_dir = %project_dir,
            separator = %separator,
            "Resolved install configuration"
        );

        Ok(Self {
            app_root,
            project_dir,
            separator,
            dry_run: overrides.dry_run,
        })
    }

    /// The application root for a native project nested one level below it
    /// (`<app>/ios`).
    pub fn default_app_root(project_dir: &NormalizedPath) -> NormalizedPath {
        project_dir
            .parent()
            .unwrap_or_else(|| project_dir.join(".."))
    }

    /// `<app_root>/.flutter-plugins`
    pub fn manifest_path(&self) -> NormalizedPath {
        self.app_root.join(PodPath::PluginsManifest.as_str())
    }

    /// `<app_root>/.flutter-plugins-dependencies`
    pub fn dependencies_path(&self) -> NormalizedPath {
        self.app_root.join(PodPath::PluginsDependencies.as_str())
    }
}
