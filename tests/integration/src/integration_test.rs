//! End-to-end integration test across the workspace crates
//!
//! Exercises the complete flow: config file -> dependency metadata ->
//! manifest -> links -> Podfile fragment.

use pods_core::{
    ConfigOverrides, FlutterDependenciesLoader, InstallConfig, PodInstaller, PodfileRegistrar,
};
use pods_fs::{NormalizedPath, io};
use pods_test_utils::app::TestApp;
use std::fs;

const DEPENDENCIES: &str = r#"{
    "plugins": {"ios": [
        {"name": "camera", "path": "PLACEHOLDER", "dependencies": []}
    ]},
    "dependencyGraph": [{"name": "camera", "dependencies": []}]
}"#;

#[cfg(unix)]
#[test]
fn test_full_install_with_config_file() {
    let app = TestApp::new();
    let camera = app.add_plugin_source("camera");
    let launcher = app.add_plugin_source("url_launcher_ios");
    app.write_raw_manifest(&format!(
        "# Generated by flutter\ncamera|{}\nurl_launcher_ios|{}\n",
        camera.display(),
        launcher.display()
    ));
    fs::write(
        app.root().join(".flutter-plugins-dependencies"),
        DEPENDENCIES.replace("PLACEHOLDER", &camera.display().to_string()),
    )
    .unwrap();
    fs::write(
        app.ios_dir().join("flutter-pods.toml"),
        "app_root = \"..\"\nseparator = \"|\"\n",
    )
    .unwrap();

    let config = InstallConfig::load(
        NormalizedPath::new(app.ios_dir()),
        None,
        ConfigOverrides::default(),
    )
    .unwrap();
    let mut loader = FlutterDependenciesLoader::new();
    let mut registrar = PodfileRegistrar::new().with_indent("  ");

    let report = PodInstaller::new(config)
        .install(&mut loader, &mut registrar)
        .unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(loader.last_loaded().unwrap().ios().len(), 1);
    app.assert_linked("camera", &camera);
    app.assert_linked("url_launcher_ios", &launcher);
    assert!(
        app.link_path("url_launcher_ios")
            .join("ios/url_launcher_ios.podspec")
            .is_file()
    );

    let podfile = NormalizedPath::new(app.ios_dir().join("Flutter/Plugins.rb"));
    io::write_text(&podfile, &registrar.render()).unwrap();
    let written = fs::read_to_string(podfile.to_native()).unwrap();
    assert_eq!(
        written,
        "  pod 'camera', :path => '.symlinks/plugins/camera/ios'\n  pod 'url_launcher_ios', :path => '.symlinks/plugins/url_launcher_ios/ios'\n"
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["plugins"][1]["name"], "url_launcher_ios");
}

#[test]
fn test_dry_run_report_matches_real_plan() {
    let app = TestApp::new();
    app.write_manifest(&[("a", "/p/a"), ("b", "/p/b")]);
    app.write_dependencies();

    let mut config = InstallConfig::new(app.root(), app.ios_dir());
    config.dry_run = true;
    let installer = PodInstaller::new(config);

    let report = installer
        .install(&mut FlutterDependenciesLoader::new(), &mut PodfileRegistrar::new())
        .unwrap();
    let manifest = pods_core::parse_kv_file(
        &installer.config().manifest_path(),
        &installer.config().separator,
    )
    .unwrap();

    assert_eq!(report.plugins, installer.plan(&manifest).unwrap());
    app.assert_no_symlinks_dir();
}
