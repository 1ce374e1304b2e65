//! Core of flutter-pods
//!
//! Parses the `.flutter-plugins` manifest, links each plugin into the
//! native project and declares it as a local pod.

pub mod config;
pub mod dependencies;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod registrar;

pub use config::{ConfigFile, ConfigOverrides, InstallConfig};
pub use dependencies::{
    DependencyLoader, FlutterDependenciesLoader, PluginDependencies, RequireFileLoader,
};
pub use error::{Error, Result};
pub use installer::{InstallReport, LinkedPlugin, PodInstaller};
pub use manifest::{DEFAULT_SEPARATOR, PluginEntry, PluginManifest, parse_kv_file, parse_kv_str};
pub use registrar::{PodDeclaration, PodRegistrar, PodfileRegistrar, RecordingRegistrar};
