//! Settings structs, one per `[section]` of the INI file.

use std::path::PathBuf;

use crate::platform::{Gid, Uid};

/// Default directory for log files, relative to the working directory.
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "fsshim.log";

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Mount settings
    pub mount: MountSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[mount]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountSettings {
    /// Where the filesystem is mounted, if configured
    pub mount_point: Option<PathBuf>,
    /// Owner uid reported for the mount
    pub uid: Uid,
    /// Owner gid reported for the mount
    pub gid: Gid,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log directory
    pub directory: PathBuf,
    /// Log file name inside `directory`
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
