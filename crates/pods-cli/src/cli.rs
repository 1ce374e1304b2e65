//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// flutter-pods - Link Flutter plugins into an iOS project and declare their pods
#[derive(Parser, Debug)]
#[command(name = "flutter-pods")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the Flutter application and native project live
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProjectArgs {
    /// Flutter application root (defaults to the parent of the project directory)
    #[arg(long, env = "FLUTTER_APPLICATION_PATH")]
    pub app_root: Option<PathBuf>,

    /// Native project directory that receives .symlinks/ (defaults to the current directory)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Config file (defaults to <project-dir>/flutter-pods.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Separator between plugin name and path in .flutter-plugins
    #[arg(long)]
    pub separator: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Link every plugin and declare it as a local pod
    ///
    /// Reads .flutter-plugins and .flutter-plugins-dependencies from the
    /// application root, creates .symlinks/plugins/<name> in the project
    /// directory and prints one Podfile `pod` line per plugin.
    ///
    /// Examples:
    ///   flutter-pods install                      # Run from <app>/ios
    ///   flutter-pods install --podfile Pods.rb    # Write the pod lines to a file
    ///   flutter-pods install --dry-run --json     # Preview as JSON
    Install {
        #[command(flatten)]
        project: ProjectArgs,

        /// Write the Podfile fragment to this file instead of stdout
        #[arg(long)]
        podfile: Option<PathBuf>,

        /// Indentation prefixed to each Podfile line
        #[arg(long, default_value = "")]
        indent: String,

        /// Preview links and declarations without touching the filesystem
        #[arg(long)]
        dry_run: bool,

        /// Output the install report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the plugins in .flutter-plugins
    List {
        #[command(flatten)]
        project: ProjectArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
