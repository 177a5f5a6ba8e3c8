//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use fsshim::config::ConfigFileError;
use fsshim::error::{ErrorType, FsError};
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(std::io::Error),
    /// Configuration error
    Config(ConfigFileError),
    /// A filesystem operation failed
    Operation { operation: String, error: FsError },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Operation { error, .. } = self {
            if error.kind() == ErrorType::GenericError && !fsshim::platform::is_supported() {
                eprintln!();
                eprintln!(
                    "The kernel channel has not been ported to {}.",
                    fsshim::platform::platform_name()
                );
                eprintln!("The function and line above show which code path needs porting.");
            }
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Operation { operation, error } => {
                write!(f, "{} failed ({}): {}", operation, error.kind(), error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Operation { error, .. } => Some(error),
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsshim::platform::not_implemented_error;
    use std::error::Error;

    #[test]
    fn test_operation_display_includes_kind_and_diagnostic() {
        let err = CliError::Operation {
            operation: "readdir".to_string(),
            error: not_implemented_error("read_dir", 10),
        };
        let text = err.to_string();
        assert!(text.starts_with("readdir failed (GENERIC_ERROR):"));
        assert!(text.contains("Function: read_dir Line: 10"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let cfg = ConfigFileError::WriteError("disk full".to_string());
        let err: CliError = cfg.into();
        assert!(err.to_string().contains("disk full"));
    }
}
