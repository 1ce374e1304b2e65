//! flutter-pods CLI
//!
//! Links the plugins of a Flutter application into its iOS project and
//! prints the matching Podfile declarations.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::InstallOptions;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Flutter plugin pod installer", "flutter-pods".green().bold());
            println!();
            println!("Run {} for available commands.", "flutter-pods --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Install {
            project,
            podfile,
            indent,
            dry_run,
            json,
        } => {
            let options = InstallOptions {
                podfile,
                indent,
                dry_run,
                json,
            };
            commands::run_install(&cwd, &project, &options)
        }
        Commands::List { project, json } => commands::run_list(&cwd, &project, json),
    }
}
