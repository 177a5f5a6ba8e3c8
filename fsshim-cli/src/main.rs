//! fsshim CLI - Command-line interface
//!
//! Inspects the platform layer and exercises portable filesystem operations
//! against it.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use fsshim::config::{ConfigFile, LoggingSettings};
use fsshim::logging::{init_logging_full, init_stderr_logging, LoggingGuard};

use commands::config::ConfigCommands;
use commands::probe::Operation;
use error::CliError;

#[derive(Parser)]
#[command(name = "fsshim", version)]
#[command(about = "Inspect the virtual filesystem platform layer", long_about = None)]
struct Cli {
    /// Log at debug level to stderr instead of the log file
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show platform and kernel channel support
    Info,

    /// Invoke one filesystem operation and report the result
    Probe {
        /// Operation to invoke
        #[arg(value_enum)]
        operation: Operation,

        /// Name used by the lookup operation
        #[arg(long, default_value = "README")]
        name: String,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { verbose, command } = cli;

    match command {
        Commands::Info => {
            let _guard = setup_logging(verbose, None)?;
            commands::info::run()
        }
        Commands::Probe { operation, name } => {
            let config = ConfigFile::load()?;
            let _guard = setup_logging(verbose, Some(&config.logging))?;
            commands::probe::run(operation, &name, &config)
        }
        Commands::Config { command } => {
            let _guard = setup_logging(verbose, None)?;
            commands::config::run(command)
        }
    }
}

/// Install the subscriber for one command.
///
/// `--verbose` logs to stderr. Otherwise only commands that pass their
/// logging settings get a log file, and nothing is written to stdout.
fn setup_logging(
    verbose: bool,
    logging: Option<&LoggingSettings>,
) -> Result<Option<LoggingGuard>, CliError> {
    if verbose {
        init_stderr_logging("debug");
        return Ok(None);
    }

    match logging {
        Some(settings) => init_logging_full(&settings.directory, &settings.file, false)
            .map(Some)
            .map_err(CliError::LoggingInit),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_probe() {
        let cli = Cli::try_parse_from(["fsshim", "probe", "readdir"]).unwrap();
        match cli.command {
            Commands::Probe { operation, name } => {
                assert_eq!(operation, Operation::Readdir);
                assert_eq!(name, "README");
            }
            _ => panic!("expected probe"),
        }
    }

    #[test]
    fn test_parse_probe_serialize_inodes_with_verbose() {
        let cli =
            Cli::try_parse_from(["fsshim", "-v", "probe", "serialize-inodes"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Probe {
                operation: Operation::SerializeInodes,
                ..
            }
        ));
    }

    #[test]
    fn test_commands_without_log_file_skip_logging() {
        let guard = setup_logging(false, None).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_unknown_operation_rejected() {
        assert!(Cli::try_parse_from(["fsshim", "probe", "mkdir"]).is_err());
    }
}
