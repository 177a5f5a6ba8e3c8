//! Error types shared by the filesystem client.
//!
//! Every failure surfaced through the portable API is an [`FsError`]. The
//! error carries an [`ErrorType`] so callers (for example an RPC layer) can
//! translate it into the right user-visible response without parsing the
//! message text.

use std::fmt::{Display, Write as _};
use std::io;
use thiserror::Error;

/// Result type for filesystem client operations.
pub type FsResult<T> = Result<T, FsError>;

/// Classification of an [`FsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// An OS call failed; `FsError::errno` holds the error number.
    PosixError,
    /// A Windows API call failed with a Win32 error code.
    Win32Error,
    /// The caller passed an invalid argument.
    ArgumentError,
    /// Catch-all for failures with no finer classification.
    GenericError,
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorType::PosixError => "POSIX_ERROR",
            ErrorType::Win32Error => "WIN32_ERROR",
            ErrorType::ArgumentError => "ARGUMENT_ERROR",
            ErrorType::GenericError => "GENERIC_ERROR",
        };
        f.write_str(name)
    }
}

/// Error returned by the filesystem client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FsError {
    kind: ErrorType,
    message: String,
    errno: Option<i32>,
}

impl FsError {
    /// Create an error of the given kind with a ready-made message.
    pub fn new(kind: ErrorType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            errno: None,
        }
    }

    /// Create a POSIX error carrying `errno`.
    pub fn posix(errno: i32, context: impl Display) -> Self {
        Self {
            kind: ErrorType::PosixError,
            message: format!("{}: {}", context, io::Error::from_raw_os_error(errno)),
            errno: Some(errno),
        }
    }

    /// Create a Win32 error carrying the system error code.
    pub fn win32(code: u32, context: impl Display) -> Self {
        Self {
            kind: ErrorType::Win32Error,
            message: format!("{}: Win32 error {:#x}", context, code),
            errno: None,
        }
    }

    /// Create an argument validation error.
    pub fn argument(message: impl Into<String>) -> Self {
        Self::new(ErrorType::ArgumentError, message)
    }

    /// The error classification.
    pub fn kind(&self) -> ErrorType {
        self.kind
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The OS error number, for [`ErrorType::PosixError`] errors.
    pub fn errno(&self) -> Option<i32> {
        self.errno
    }
}

impl From<io::Error> for FsError {
    fn from(e: io::Error) -> Self {
        match e.raw_os_error() {
            Some(errno) => Self {
                kind: ErrorType::PosixError,
                message: e.to_string(),
                errno: Some(errno),
            },
            None => Self::new(ErrorType::GenericError, e.to_string()),
        }
    }
}

/// Build an [`FsError`] by concatenating the `Display` output of `parts`.
///
/// No separator is inserted between parts; callers supply their own
/// spacing.
///
/// ```
/// use fsshim::error::{new_fs_error, ErrorType};
///
/// let err = new_fs_error(ErrorType::ArgumentError, ["inode ", "42", " is stale"]);
/// assert_eq!(err.to_string(), "inode 42 is stale");
/// ```
pub fn new_fs_error<I>(kind: ErrorType, parts: I) -> FsError
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut message = String::new();
    for part in parts {
        // Writing into a String cannot fail.
        let _ = write!(message, "{}", part);
    }
    FsError::new(kind, message)
}
