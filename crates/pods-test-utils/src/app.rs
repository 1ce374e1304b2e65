//! [`TestApp`] builder for installer test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal valid `.flutter-plugins-dependencies` content.
pub const EMPTY_DEPENDENCIES: &str = r#"{"info":"test","plugins":{"ios":[]},"dependencyGraph":[]}"#;

/// A temporary Flutter application layout:
///
/// ```text
/// <root>/
///   .flutter-plugins
///   .flutter-plugins-dependencies
///   ios/
///   pub/<plugin>/ios/
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use pods_test_utils::app::TestApp;
///
/// let app = TestApp::new();
/// let camera = app.add_plugin_source("camera");
/// app.write_manifest(&[("camera", camera.to_str().unwrap())]);
/// app.write_dependencies();
/// ```
pub struct TestApp {
    temp_dir: TempDir,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Create an application root with an empty `ios/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("ios")).unwrap();
        Self { temp_dir }
    }

    /// The application root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The native project directory (`<root>/ios`).
    pub fn ios_dir(&self) -> PathBuf {
        self.root().join("ios")
    }

    /// Create `<root>/pub/<name>/ios` and return `<root>/pub/<name>`.
    pub fn add_plugin_source(&self, name: &str) -> PathBuf {
        let dir = self.root().join("pub").join(name);
        fs::create_dir_all(dir.join("ios")).unwrap();
        fs::write(dir.join("ios").join(format!("{name}.podspec")), "").unwrap();
        dir
    }

    /// Write `.flutter-plugins` from `(name, path)` pairs.
    pub fn write_manifest(&self, plugins: &[(&str, &str)]) {
        let content: String = plugins
            .iter()
            .map(|(name, path)| format!("{name}={path}\n"))
            .collect();
        self.write_raw_manifest(&content);
    }

    /// Write `.flutter-plugins` verbatim.
    pub fn write_raw_manifest(&self, content: &str) {
        fs::write(self.root().join(".flutter-plugins"), content).unwrap();
    }

    /// Write a minimal `.flutter-plugins-dependencies`.
    pub fn write_dependencies(&self) {
        fs::write(
            self.root().join(".flutter-plugins-dependencies"),
            EMPTY_DEPENDENCIES,
        )
        .unwrap();
    }

    /// Path of `.symlinks/plugins/<name>` inside the native project.
    pub fn link_path(&self, name: &str) -> PathBuf {
        self.ios_dir().join(".symlinks").join("plugins").join(name)
    }

    /// Assert that `.symlinks/plugins/<name>` is a symlink pointing at `target`.
    ///
    /// # Panics
    /// Panics with a descriptive message otherwise.
    pub fn assert_linked(&self, name: &str, target: &Path) {
        let link = self.link_path(name);
        let meta = fs::symlink_metadata(&link)
            .unwrap_or_else(|_| panic!("Expected link to exist: {}", link.display()));
        assert!(
            meta.file_type().is_symlink(),
            "Expected a symlink: {}",
            link.display()
        );
        let actual = fs::read_link(&link).unwrap();
        assert_eq!(actual, target, "Link {} points elsewhere", link.display());
    }

    /// Assert that no `.symlinks` directory was created.
    ///
    /// # Panics
    /// Panics if `<ios>/.symlinks` exists.
    pub fn assert_no_symlinks_dir(&self) {
        let dir = self.ios_dir().join(".symlinks");
        assert!(
            !dir.exists(),
            "Expected no writes, but {} exists",
            dir.display()
        );
    }
}
