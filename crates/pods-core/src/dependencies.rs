//! Plugin dependency metadata
//!
//! The installer hands `.flutter-plugins-dependencies` to a
//! [`DependencyLoader`] before reading the manifest and trusts whatever the
//! loader does with it. A missing file is always fatal.

use std::collections::BTreeMap;

use pods_fs::{NormalizedPath, io};
use serde::Deserialize;

use crate::{Error, Result};

/// Collaborator that consumes the dependency metadata file.
pub trait DependencyLoader {
    /// Load the metadata at `path`.
    ///
    /// Implementations must fail with [`Error::FileNotFound`] when the file
    /// is absent.
    fn load(&mut self, path: &NormalizedPath) -> Result<()>;
}

/// Loader that only requires the file to exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequireFileLoader;

impl DependencyLoader for RequireFileLoader {
    fn load(&mut self, path: &NormalizedPath) -> Result<()> {
        io::require_file(path)?;
        Ok(())
    }
}

/// One plugin as recorded by the Flutter tool for a platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformPlugin {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A node of the plugin dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphNode {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Parsed `.flutter-plugins-dependencies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluginDependencies {
    #[serde(default)]
    pub info: Option<String>,
    /// Plugins keyed by platform (`ios`, `android`, `macos`, ...)
    #[serde(default)]
    pub plugins: BTreeMap<String, Vec<PlatformPlugin>>,
    #[serde(default, rename = "dependencyGraph")]
    pub dependency_graph: Vec<GraphNode>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl PluginDependencies {
    pub fn parse(path: &NormalizedPath, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::DependencyMetadata {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Plugins recorded for `platform`, empty if none.
    pub fn platform(&self, platform: &str) -> &[PlatformPlugin] {
        self.plugins.get(platform).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn ios(&self) -> &[PlatformPlugin] {
        self.platform("ios")
    }

    /// Names from `names` that the metadata does not list for `platform`.
    pub fn unlisted<'a>(
        &self,
        platform: &str,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Vec<&'a str> {
        let listed = self.platform(platform);
        names
            .into_iter()
            .filter(|name| !listed.iter().any(|p| p.name == *name))
            .collect()
    }
}

/// Loader that parses the JSON metadata written by the Flutter tool.
#[derive(Debug, Default)]
pub struct FlutterDependenciesLoader {
    loaded: Option<PluginDependencies>,
}

impl FlutterDependenciesLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata from the most recent successful [`DependencyLoader::load`].
    pub fn last_loaded(&self) -> Option<&PluginDependencies> {
        self.loaded.as_ref()
    }
}

impl DependencyLoader for FlutterDependenciesLoader {
    fn load(&mut self, path: &NormalizedPath) -> Result<()> {
        let content = io::read_text(path)?;
        let deps = PluginDependencies::parse(path, &content)?;
        tracing::debug!(
            path = %path,
            ios_plugins = deps.ios().len(),
            graph_nodes = deps.dependency_graph.len(),
            "Loaded plugin dependency metadata"
        );
        self.loaded = Some(deps);
        Ok(())
    }
}
