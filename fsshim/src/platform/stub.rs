//! Kernel-channel and inode-map stand-ins for platforms without a port.

use crate::channel::{DirEntry, InodeAttributes, InodeMap, KernelChannel};
use crate::error::FsResult;
use crate::not_implemented;

use super::types::{FuseChannelData, FuseInitOut, SerializedInodeMap};
use super::unimplemented::raise_not_implemented;

/// Name of the operating system this crate was built for.
pub fn platform_name() -> &'static str {
    std::env::consts::OS
}

/// Whether a real kernel channel exists for this platform.
///
/// No platform has a port yet.
pub fn is_supported() -> bool {
    false
}

/// The only [`KernelChannel`] available on this platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedChannel;

impl UnsupportedChannel {
    pub fn new() -> Self {
        Self
    }
}

impl KernelChannel for UnsupportedChannel {
    fn initialize(&mut self) -> FsResult<FuseInitOut> {
        not_implemented!()
    }

    fn read_dir(&mut self, _ino: u64) -> FsResult<Vec<DirEntry>> {
        not_implemented!()
    }

    fn lookup(&mut self, _parent: u64, _name: &str) -> FsResult<DirEntry> {
        not_implemented!()
    }

    fn get_attr(&mut self, _ino: u64) -> FsResult<InodeAttributes> {
        not_implemented!()
    }

    fn invalidate_inode(&mut self, _ino: u64) -> FsResult<()> {
        not_implemented!()
    }

    fn steal_channel_data(&mut self) -> FsResult<FuseChannelData> {
        not_implemented!()
    }

    fn connection_info(&self) -> FuseInitOut {
        raise_not_implemented(crate::function_name!())
    }
}

/// The only [`InodeMap`] available on this platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedInodeMap;

impl UnsupportedInodeMap {
    pub fn new() -> Self {
        Self
    }
}

impl InodeMap for UnsupportedInodeMap {
    fn serialize(&self) -> FsResult<SerializedInodeMap> {
        not_implemented!()
    }

    fn load(&mut self, _map: SerializedInodeMap) -> FsResult<()> {
        not_implemented!()
    }
}
