//! List command implementation

use std::path::Path;

use colored::Colorize;
use pods_core::{PluginManifest, parse_kv_file};

use crate::cli::ProjectArgs;
use crate::commands::resolve_config;
use crate::error::Result;

/// Run the list command
pub fn run_list(cwd: &Path, project: &ProjectArgs, json: bool) -> Result<()> {
    let manifest = load_manifest(cwd, project)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    if manifest.is_empty() {
        println!("{}", "No plugins".dimmed());
        return Ok(());
    }

    for entry in &manifest {
        println!("{} {}", entry.name.cyan(), entry.path.dimmed());
    }

    Ok(())
}

/// Parse `.flutter-plugins` for the resolved application root
pub fn load_manifest(cwd: &Path, project: &ProjectArgs) -> Result<PluginManifest> {
    let config = resolve_config(cwd, project, false)?;
    Ok(parse_kv_file(&config.manifest_path(), &config.separator)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pods_test_utils::app::TestApp;

    #[test]
    fn test_load_manifest_with_custom_separator() {
        let app = TestApp::new();
        app.write_raw_manifest("camera:/p/camera\n");
        let project = ProjectArgs {
            app_root: Some(app.root().to_path_buf()),
            project_dir: None,
            config: None,
            separator: Some(":".into()),
        };

        let manifest = load_manifest(&app.ios_dir(), &project).unwrap();

        assert_eq!(manifest.get("camera"), Some("/p/camera"));
    }
}
