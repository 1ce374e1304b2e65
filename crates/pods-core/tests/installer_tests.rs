//! End-to-end installer tests against a temporary Flutter application.

use pods_core::{
    Error, FlutterDependenciesLoader, InstallConfig, PodInstaller, PodfileRegistrar,
    RecordingRegistrar, RequireFileLoader,
};
use pods_test_utils::app::TestApp;
use pretty_assertions::assert_eq;

fn config_for(app: &TestApp) -> InstallConfig {
    InstallConfig::new(app.root(), app.ios_dir())
}

#[cfg(unix)]
#[test]
fn test_installs_two_plugins() {
    let app = TestApp::new();
    app.write_manifest(&[("a", "/p/a"), ("b", "/p/b")]);
    app.write_dependencies();

    let mut registrar = RecordingRegistrar::new();
    let report = PodInstaller::new(config_for(&app))
        .install(&mut FlutterDependenciesLoader::new(), &mut registrar)
        .unwrap();

    app.assert_linked("a", std::path::Path::new("/p/a"));
    app.assert_linked("b", std::path::Path::new("/p/b"));

    let declared: Vec<(String, String)> = registrar
        .declarations()
        .iter()
        .map(|d| (d.name.clone(), d.path.as_str().to_string()))
        .collect();
    assert_eq!(
        declared,
        vec![
            ("a".to_string(), ".symlinks/plugins/a/ios".to_string()),
            ("b".to_string(), ".symlinks/plugins/b/ios".to_string()),
        ]
    );
    assert_eq!(report.len(), 2);
    assert!(!report.dry_run);
}

#[cfg(unix)]
#[test]
fn test_linked_plugin_exposes_ios_sources() {
    let app = TestApp::new();
    let camera = app.add_plugin_source("camera");
    app.write_manifest(&[("camera", camera.to_str().unwrap())]);
    app.write_dependencies();

    PodInstaller::new(config_for(&app))
        .install(&mut RequireFileLoader, &mut RecordingRegistrar::new())
        .unwrap();

    assert!(app.link_path("camera").join("ios").join("camera.podspec").is_file());
}

#[cfg(unix)]
#[test]
fn test_reinstall_overwrites_links() {
    let app = TestApp::new();
    app.write_dependencies();
    let installer = PodInstaller::new(config_for(&app));

    app.write_manifest(&[("a", "/p/old")]);
    installer
        .install(&mut RequireFileLoader, &mut RecordingRegistrar::new())
        .unwrap();

    app.write_manifest(&[("a", "/p/new")]);
    installer
        .install(&mut RequireFileLoader, &mut RecordingRegistrar::new())
        .unwrap();

    app.assert_linked("a", std::path::Path::new("/p/new"));
}

#[test]
fn test_missing_manifest_fails_without_writes() {
    let app = TestApp::new();
    app.write_dependencies();

    let mut registrar = RecordingRegistrar::new();
    let err = PodInstaller::new(config_for(&app))
        .install(&mut FlutterDependenciesLoader::new(), &mut registrar)
        .unwrap_err();

    assert!(err.is_not_found(), "expected FileNotFound, got {:?}", err);
    assert!(err.to_string().contains(".flutter-plugins"));
    assert!(registrar.declarations().is_empty());
    app.assert_no_symlinks_dir();
}

#[test]
fn test_missing_dependencies_file_fails_without_writes() {
    let app = TestApp::new();
    app.write_manifest(&[("a", "/p/a")]);

    let err = PodInstaller::new(config_for(&app))
        .install(&mut FlutterDependenciesLoader::new(), &mut RecordingRegistrar::new())
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains(".flutter-plugins-dependencies"));
    app.assert_no_symlinks_dir();
}

#[test]
fn test_malformed_manifest_fails_without_writes() {
    let app = TestApp::new();
    app.write_raw_manifest("a=/p/a\nbroken\n");
    app.write_dependencies();

    let result = PodInstaller::new(config_for(&app))
        .install(&mut RequireFileLoader, &mut RecordingRegistrar::new());

    assert!(matches!(result, Err(pods_core::Error::MalformedLine { .. })));
    app.assert_no_symlinks_dir();
}

#[test]
fn test_dry_run_leaves_project_untouched() {
    let app = TestApp::new();
    app.write_manifest(&[("a", "/p/a")]);
    app.write_dependencies();
    let mut config = config_for(&app);
    config.dry_run = true;

    let mut registrar = PodfileRegistrar::new();
    let report = PodInstaller::new(config)
        .install(&mut RequireFileLoader, &mut registrar)
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(
        registrar.render(),
        "pod 'a', :path => '.symlinks/plugins/a/ios'\n"
    );
    app.assert_no_symlinks_dir();
}

#[test]
fn test_empty_manifest_installs_nothing() {
    let app = TestApp::new();
    app.write_raw_manifest("# no plugins\n");
    app.write_dependencies();

    let report = PodInstaller::new(config_for(&app))
        .install(&mut RequireFileLoader, &mut RecordingRegistrar::new())
        .unwrap();

    assert!(report.is_empty());
}

#[cfg(unix)]
#[test]
fn test_failure_midway_keeps_earlier_links() {
    let app = TestApp::new();
    app.write_manifest(&[("a", "/p/a"), ("b", "/p/b")]);
    app.write_dependencies();
    std::fs::create_dir_all(app.link_path("b")).unwrap();

    let mut registrar = RecordingRegistrar::new();
    let result = PodInstaller::new(config_for(&app)).install(&mut RequireFileLoader, &mut registrar);

    assert!(
        matches!(result, Err(Error::Fs(pods_fs::Error::Symlink { .. }))),
        "expected a symlink error, got {:?}",
        result
    );
    app.assert_linked("a", std::path::Path::new("/p/a"));
    assert!(app.link_path("b").is_dir());
    assert_eq!(registrar.declarations().len(), 1);
    assert_eq!(registrar.declarations()[0].name, "a");
}

#[test]
fn test_line_break_in_plugin_name_fails_before_writes() {
    let app = TestApp::new();
    app.write_raw_manifest("a=/p/a\na\rb=/p/x\n");
    app.write_dependencies();

    let mut registrar = PodfileRegistrar::new();
    let result = PodInstaller::new(config_for(&app)).install(&mut RequireFileLoader, &mut registrar);

    assert!(
        matches!(result, Err(Error::InvalidPluginName { ref name, .. }) if name == "a\rb"),
        "expected an invalid plugin name, got {:?}",
        result
    );
    assert!(registrar.is_empty());
    app.assert_no_symlinks_dir();
}
