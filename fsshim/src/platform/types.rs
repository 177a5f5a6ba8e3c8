//! Placeholder records shared with portable code.
//!
//! Field names and types match the kernel-channel structures used on ported
//! platforms, so portable call sites compile unmodified against either.

use std::fmt;

/// User identifier.
pub type Uid = i32;

/// Group identifier.
pub type Gid = i32;

/// Owned OS handle backing a kernel channel.
#[cfg(unix)]
pub type PlatformHandle = std::os::fd::OwnedFd;

/// Owned OS handle backing a kernel channel.
#[cfg(windows)]
pub type PlatformHandle = std::os::windows::io::OwnedHandle;

/// Marker for functionality that does not exist on this platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unsupported on this platform")
    }
}

/// Protocol version pair negotiated during the channel init handshake.
///
/// Always zero here: no handshake ever runs on this platform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuseInitOut {
    pub major: u32,
    pub minor: u32,
}

/// Kernel channel handle plus the connection info negotiated on it.
///
/// Owned by the [`Mount`](crate::channel::Mount) that embeds it. Dropping
/// the record closes `fd`.
#[derive(Debug)]
pub struct FuseChannelData {
    pub fd: PlatformHandle,
    pub conn_info: FuseInitOut,
}

impl FuseChannelData {
    pub fn new(fd: PlatformHandle, conn_info: FuseInitOut) -> Self {
        Self { fd, conn_info }
    }
}

/// Persisted inode map, as handed from one process to its successor.
///
/// Inode map serialization is not available on this platform, so the only
/// value this type can hold is the [`Unsupported`] marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializedInodeMap(pub Unsupported);
