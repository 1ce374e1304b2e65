//! Install command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;
use pods_core::{FlutterDependenciesLoader, InstallReport, PodInstaller, PodfileRegistrar};
use pods_fs::{NormalizedPath, io};

use crate::cli::ProjectArgs;
use crate::commands::resolve_config;
use crate::error::{CliError, Result};

/// Output options for the install command
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub podfile: Option<PathBuf>,
    pub indent: String,
    pub dry_run: bool,
    pub json: bool,
}

/// Run the install command and print its output
pub fn run_install(cwd: &Path, project: &ProjectArgs, options: &InstallOptions) -> Result<()> {
    let (report, fragment) = install(cwd, project, options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &options.podfile {
        Some(path) => print_summary(&report, path),
        None => print!("{}", fragment),
    }

    Ok(())
}

/// Run the installer, writing the Podfile fragment if requested.
///
/// Returns the report and the rendered fragment.
pub fn install(
    cwd: &Path,
    project: &ProjectArgs,
    options: &InstallOptions,
) -> Result<(InstallReport, String)> {
    if options.indent.contains(['\n', '\r']) {
        return Err(CliError::user("--indent must not contain line breaks"));
    }

    let config = resolve_config(cwd, project, options.dry_run)?;
    let installer = PodInstaller::new(config);

    let mut loader = FlutterDependenciesLoader::new();
    let mut registrar = PodfileRegistrar::new().with_indent(options.indent.as_str());
    let report = installer.install(&mut loader, &mut registrar)?;

    if let Some(deps) = loader.last_loaded() {
        let names = report.plugins.iter().map(|p| p.name.as_str());
        for name in deps.unlisted("ios", names) {
            tracing::warn!(pod = %name, "Plugin not listed for ios in .flutter-plugins-dependencies");
        }
    }

    let fragment = registrar.render();
    if let Some(path) = &options.podfile {
        if options.dry_run {
            tracing::info!(path = %path.display(), "Dry run, not writing Podfile fragment");
        } else {
            io::write_text(&NormalizedPath::new(cwd.join(path)), &fragment)?;
        }
    }

    Ok((report, fragment))
}

fn print_summary(report: &InstallReport, podfile: &Path) {
    for plugin in &report.plugins {
        println!(
            "  {} {} -> {}",
            "+".green(),
            plugin.name.cyan(),
            plugin.target.as_str().dimmed()
        );
    }
    println!("{}", summary_line(report, podfile));
}

fn summary_line(report: &InstallReport, podfile: &Path) -> String {
    if report.dry_run {
        format!(
            "Would link {} plugin(s); {} not written (dry run)",
            report.len(),
            podfile.display()
        )
    } else {
        format!(
            "Linked {} plugin(s); pod declarations in {}",
            report.len(),
            podfile.display()
        )
    }
}
