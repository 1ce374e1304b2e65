//! Well-known file and directory names of a Flutter application.

use std::path::Path;

/// Standard Flutter/CocoaPods paths the installer reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodPath {
    /// The `.flutter-plugins` manifest (app root)
    PluginsManifest,
    /// The `.flutter-plugins-dependencies` metadata file (app root)
    PluginsDependencies,
    /// The `.symlinks` directory (native project root)
    SymlinksDir,
    /// The `plugins` directory below `.symlinks`
    PluginsDir,
    /// The `ios` directory inside each plugin
    IosDir,
    /// The optional `flutter-pods.toml` config file (native project root)
    ConfigFile,
}

impl PodPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PluginsManifest => ".flutter-plugins",
            Self::PluginsDependencies => ".flutter-plugins-dependencies",
            Self::SymlinksDir => ".symlinks",
            Self::PluginsDir => "plugins",
            Self::IosDir => "ios",
            Self::ConfigFile => "flutter-pods.toml",
        }
    }
}

impl AsRef<Path> for PodPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for PodPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for PodPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
