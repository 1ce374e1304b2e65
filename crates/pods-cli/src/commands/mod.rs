//! Command implementations for pods-cli

pub mod install;
pub mod list;

pub use install::{InstallOptions, run_install};
pub use list::run_list;

use std::path::Path;

use pods_core::{ConfigOverrides, InstallConfig};
use pods_fs::NormalizedPath;

use crate::cli::ProjectArgs;
use crate::error::Result;

/// Resolve the installer configuration from command-line arguments.
///
/// Relative paths are taken relative to `cwd`.
pub fn resolve_config(cwd: &Path, project: &ProjectArgs, dry_run: bool) -> Result<InstallConfig> {
    let project_dir = NormalizedPath::new(
        project
            .project_dir
            .as_ref()
            .map(|dir| cwd.join(dir))
            .unwrap_or_else(|| cwd.to_path_buf()),
    );

    let overrides = ConfigOverrides {
        app_root: project
            .app_root
            .as_ref()
            .map(|root| NormalizedPath::new(cwd.join(root))),
        separator: project.separator.clone(),
        dry_run,
    };
    let config_path = project
        .config
        .as_ref()
        .map(|path| NormalizedPath::new(cwd.join(path)));

    Ok(InstallConfig::load(project_dir, config_path, overrides)?)
}
