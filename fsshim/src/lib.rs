//! fsshim - Platform stub layer for a FUSE-style virtual filesystem client
//!
//! Portable filesystem code is written against the [`channel`] interfaces
//! and the records in [`platform`]. On hosts where the kernel channel has not
//! been ported, [`platform`] supplies those records and stand-in
//! implementations that fail every call with a diagnostic naming the
//! function and line that was reached.
//!
//! ```
//! use fsshim::channel::{Mount, ROOT_INODE};
//! use fsshim::error::ErrorType;
//!
//! let mut mount = Mount::for_current_platform("/mnt/repo", 0, 0);
//! let err = mount.read_dir(ROOT_INODE).unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorType::GenericError);
//! assert!(err.message().contains("NOT IMPLEMENTED"));
//! assert!(err.message().contains("read_dir"));
//! ```

pub mod channel;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;

/// Version of the fsshim library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
