//! Configuration CLI commands.
//!
//! Provides `config path` and `config show`.

use clap::Subcommand;
use fsshim::config::{config_file_path, ConfigFile};
use std::path::Path;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration (defaults applied)
    Show,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    run_with_path(command, &config_file_path())
}

/// Run a config subcommand against the file at `path`.
///
/// The file is only parsed by `show`, so `path` still works when the file
/// is malformed.
fn run_with_path(command: ConfigCommands, path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = ConfigFile::load_from(path)?;
            show(&config);
            Ok(())
        }
    }
}

fn show(config: &ConfigFile) {
    let mount_point = config
        .mount
        .mount_point
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string());

    println!("[mount]");
    println!("  mount_point = {}", mount_point);
    println!("  uid         = {}", config.mount.uid);
    println!("  gid         = {}", config.mount.gid);
    println!("[logging]");
    println!("  directory   = {}", config.logging.directory.display());
    println!("  file        = {}", config.logging.file);
}
