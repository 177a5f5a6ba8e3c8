//! User configuration stored in `~/.fsshim/config.ini`.
//!
//! # Example
//!
//! ```
//! use fsshim::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.logging.file, "fsshim.log");
//! assert_eq!(config.mount.uid, 0);
//! ```

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use settings::{LoggingSettings, MountSettings, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_FILE};
