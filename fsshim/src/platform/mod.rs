//! Platform layer for hosts without a kernel-channel port.
//!
//! Supplies the records portable code compiles against and turns every use
//! of the missing kernel integration into a [`GenericError`] whose message
//! names the function and line that was reached:
//!
//! ```text
//!  +++++  NOT IMPLEMENTED +++++++ Function: read_dir Line: 42
//! ```
//!
//! [`GenericError`]: crate::error::ErrorType::GenericError

mod stub;
mod types;
mod unimplemented;

pub use stub::{is_supported, platform_name, UnsupportedChannel, UnsupportedInodeMap};
pub use types::{
    FuseChannelData, FuseInitOut, Gid, PlatformHandle, SerializedInodeMap, Uid, Unsupported,
};
pub use unimplemented::{
    not_implemented_error, raise_not_implemented, short_function_name, NOT_IMPLEMENTED_MARKER,
};
