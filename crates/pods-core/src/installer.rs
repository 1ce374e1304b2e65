//! Plugin pod installation
//!
//! For every plugin in `.flutter-plugins` the installer creates
//! `.symlinks/plugins/<name>` in the native project, pointing at the
//! plugin's source directory, and declares `<symlink>/ios` as a local pod.
//!
//! Both input files are read before the first write, so a missing manifest
//! leaves the project untouched. After that, failures stop the run where
//! they happen; links created so far are kept.

use pods_fs::{NormalizedPath, PodPath, io, validate_path_segment};
use serde::Serialize;

use crate::config::InstallConfig;
use crate::dependencies::DependencyLoader;
use crate::manifest::{PluginManifest, parse_kv_file};
use crate::registrar::{PodDeclaration, PodRegistrar};
use crate::{Error, Result};

/// One plugin linked (or, in a dry run, to be linked) into the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedPlugin {
    pub name: String,
    /// Where the link points (the manifest path, verbatim)
    #[serde(serialize_with = "serialize_path")]
    pub target: NormalizedPath,
    /// The link itself, inside the project directory
    #[serde(serialize_with = "serialize_path")]
    pub link: NormalizedPath,
    pub declaration: PodDeclaration,
}

fn serialize_path<S: serde::Serializer>(path: &NormalizedPath, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(path.as_str())
}

/// Result of an installer run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub dry_run: bool,
    pub plugins: Vec<LinkedPlugin>,
}

impl InstallReport {
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn declarations(&self) -> impl Iterator<Item = &PodDeclaration> {
        self.plugins.iter().map(|p| &p.declaration)
    }
}

/// Links plugins into a native project and declares them as pods.
#[derive(Debug, Clone)]
pub struct PodInstaller {
    config: InstallConfig,
}

impl PodInstaller {
    pub fn new(config: InstallConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InstallConfig {
        &self.config
    }

    /// `.symlinks/plugins/<name>`, relative to the project directory.
    pub fn relative_link(name: &str) -> NormalizedPath {
        NormalizedPath::new(PodPath::SymlinksDir.as_str())
            .join(PodPath::PluginsDir.as_str())
            .join(name)
    }

    /// Load metadata, parse the manifest, then link and declare every plugin.
    pub fn install(
        &self,
        loader: &mut dyn DependencyLoader,
        registrar: &mut dyn PodRegistrar,
    ) -> Result<InstallReport> {
        loader.load(&self.config.dependencies_path())?;

        let manifest = parse_kv_file(&self.config.manifest_path(), &self.config.separator)?;
        tracing::debug!(plugins = manifest.len(), "Parsed plugin manifest");

        self.install_manifest(&manifest, registrar)
    }

    /// Link and declare every plugin of an already parsed manifest.
    pub fn install_manifest(
        &self,
        manifest: &PluginManifest,
        registrar: &mut dyn PodRegistrar,
    ) -> Result<InstallReport> {
        let plan = self.plan(manifest)?;
        let mut report = InstallReport {
            dry_run: self.config.dry_run,
            plugins: Vec::with_capacity(plan.len()),
        };

        for plugin in plan {
            if self.config.dry_run {
                tracing::info!(pod = %plugin.name, link = %plugin.link, "Would link plugin");
            } else {
                io::symlink_force(&plugin.target, &plugin.link)?;
                tracing::info!(pod = %plugin.name, target = %plugin.target, "Linked plugin");
            }

            registrar.declare(&plugin.declaration)?;
            report.plugins.push(plugin);
        }

        Ok(report)
    }

    /// Compute links and declarations without touching the filesystem.
    ///
    /// Every plugin name is validated before anything is returned.
    pub fn plan(&self, manifest: &PluginManifest) -> Result<Vec<LinkedPlugin>> {
        manifest
            .iter()
            .map(|entry| -> Result<LinkedPlugin> {
                validate_path_segment(&entry.name).map_err(|e| match e {
                    pods_fs::Error::InvalidSegment { segment, reason } => {
                        Error::InvalidPluginName {
                            name: segment,
                            reason,
                        }
                    }
                    other => other.into(),
                })?;

                let relative = Self::relative_link(&entry.name);
                let declaration = PodDeclaration::new(
                    entry.name.clone(),
                    relative.join(PodPath::IosDir.as_str()),
                );

                Ok(LinkedPlugin {
                    name: entry.name.clone(),
                    target: NormalizedPath::new(&entry.path),
                    link: self.config.project_dir.join(relative.as_str()),
                    declaration,
                })
            })
            .collect()
    }
}
