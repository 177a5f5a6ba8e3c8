//! Portable kernel-channel interface.
//!
//! Everything above the platform layer talks to the kernel through
//! [`KernelChannel`] and persists inode state through [`InodeMap`]. A
//! [`Mount`] ties one of each to a mount point and owns the channel's
//! [`FuseChannelData`].
//!
//! On platforms without a port both traits are implemented only by the
//! failing stand-ins in [`crate::platform`].

mod mount;

pub use mount::{Mount, RestoreError, TakeoverData};

use crate::error::FsResult;
use crate::platform::{FuseChannelData, FuseInitOut, Gid, SerializedInodeMap, Uid};

/// Inode number of the mount root.
pub const ROOT_INODE: u64 = 1;

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub ino: u64,
}

/// Attributes of an inode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InodeAttributes {
    pub ino: u64,
    pub size: u64,
    pub mode: u32,
    pub uid: Uid,
    pub gid: Gid,
}

/// Request/response channel between the filesystem and the kernel.
pub trait KernelChannel: Send {
    /// Perform the init handshake and return the negotiated protocol version.
    fn initialize(&mut self) -> FsResult<FuseInitOut>;

    /// List the entries of directory `ino`.
    fn read_dir(&mut self, ino: u64) -> FsResult<Vec<DirEntry>>;

    /// Resolve `name` inside directory `parent`.
    fn lookup(&mut self, parent: u64, name: &str) -> FsResult<DirEntry>;

    /// Fetch the attributes of `ino`.
    fn get_attr(&mut self, ino: u64) -> FsResult<InodeAttributes>;

    /// Drop any kernel-side cache for `ino`.
    fn invalidate_inode(&mut self, ino: u64) -> FsResult<()>;

    /// Detach the channel handle so it can outlive this process.
    fn steal_channel_data(&mut self) -> FsResult<FuseChannelData>;

    /// Protocol version currently in effect.
    fn connection_info(&self) -> FuseInitOut;
}

/// Mapping from inode numbers to their backing-store locations.
pub trait InodeMap: Send {
    /// Persist the map for a successor process.
    fn serialize(&self) -> FsResult<SerializedInodeMap>;

    /// Restore the map from a predecessor's serialized form.
    fn load(&mut self, map: SerializedInodeMap) -> FsResult<()>;
}
