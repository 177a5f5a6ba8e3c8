//! A mounted filesystem session.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{DirEntry, InodeAttributes, InodeMap, KernelChannel};
use crate::error::{FsError, FsResult};
use crate::platform::{
    FuseChannelData, FuseInitOut, Gid, SerializedInodeMap, Uid, UnsupportedChannel,
    UnsupportedInodeMap,
};

/// State handed to a successor process during a graceful takeover.
#[derive(Debug)]
pub struct TakeoverData {
    pub channel: FuseChannelData,
    pub inode_map: SerializedInodeMap,
}

/// A failed [`Mount::restore`].
///
/// The takeover data comes back untouched so the caller still holds the
/// predecessor's channel handle.
#[derive(Debug, Error)]
#[error("Failed to restore takeover data: {error}")]
pub struct RestoreError {
    #[source]
    pub error: FsError,
    pub data: TakeoverData,
}

/// One mount point and the kernel channel serving it.
///
/// The mount exclusively owns its [`FuseChannelData`]; the handle inside it
/// is closed when the mount is dropped unless it was handed off through
/// [`Mount::take_over`].
pub struct Mount {
    mount_point: PathBuf,
    owner_uid: Uid,
    owner_gid: Gid,
    channel: Box<dyn KernelChannel>,
    inode_map: Box<dyn InodeMap>,
    channel_data: Option<FuseChannelData>,
    negotiated: Option<FuseInitOut>,
}

impl Mount {
    pub fn new(
        mount_point: impl Into<PathBuf>,
        owner_uid: Uid,
        owner_gid: Gid,
        channel: Box<dyn KernelChannel>,
        inode_map: Box<dyn InodeMap>,
    ) -> Self {
        Self {
            mount_point: mount_point.into(),
            owner_uid,
            owner_gid,
            channel,
            inode_map,
            channel_data: None,
            negotiated: None,
        }
    }

    /// Create a mount wired to this platform's channel and inode map.
    pub fn for_current_platform(mount_point: impl Into<PathBuf>, uid: Uid, gid: Gid) -> Self {
        Self::new(
            mount_point,
            uid,
            gid,
            Box::new(UnsupportedChannel::new()),
            Box::new(UnsupportedInodeMap::new()),
        )
    }

    pub fn mount_point(&self) -> &Path {
        &self.mount_point
    }

    pub fn owner(&self) -> (Uid, Gid) {
        (self.owner_uid, self.owner_gid)
    }

    /// Protocol version agreed in [`Mount::start`], if it has run.
    pub fn negotiated(&self) -> Option<FuseInitOut> {
        self.negotiated
    }

    /// Run the init handshake on the channel.
    pub fn start(&mut self) -> FsResult<FuseInitOut> {
        debug!(mount_point = %self.mount_point.display(), "Starting kernel channel");

        let info = self.channel.initialize()?;
        if let Some(data) = self.channel_data.as_mut() {
            data.conn_info = info;
        }
        self.negotiated = Some(info);

        info!(
            mount_point = %self.mount_point.display(),
            major = info.major,
            minor = info.minor,
            "Kernel channel initialized"
        );
        Ok(info)
    }

    pub fn read_dir(&mut self, ino: u64) -> FsResult<Vec<DirEntry>> {
        self.channel.read_dir(ino)
    }

    pub fn lookup(&mut self, parent: u64, name: &str) -> FsResult<DirEntry> {
        self.channel.lookup(parent, name)
    }

    pub fn get_attr(&mut self, ino: u64) -> FsResult<InodeAttributes> {
        self.channel.get_attr(ino)
    }

    pub fn invalidate_inode(&mut self, ino: u64) -> FsResult<()> {
        self.channel.invalidate_inode(ino)
    }

    /// Persist the inode map without handing anything off.
    pub fn serialize_inodes(&self) -> FsResult<SerializedInodeMap> {
        self.inode_map.serialize()
    }

    /// Restore inode state handed over by a predecessor.
    ///
    /// The channel data is installed only after the inode map loads. On
    /// failure nothing is installed and `data` is returned in the error.
    pub fn restore(&mut self, data: TakeoverData) -> Result<(), RestoreError> {
        if let Err(error) = self.inode_map.load(data.inode_map) {
            warn!(
                mount_point = %self.mount_point.display(),
                error = %error,
                "Inode map restore failed, returning channel data"
            );
            return Err(RestoreError { error, data });
        }
        self.install_channel_data(data.channel);
        Ok(())
    }

    pub fn channel_data(&self) -> Option<&FuseChannelData> {
        self.channel_data.as_ref()
    }

    /// Replace the owned channel record, closing the previous handle.
    pub fn install_channel_data(&mut self, data: FuseChannelData) {
        if self.channel_data.is_some() {
            warn!(
                mount_point = %self.mount_point.display(),
                "Replacing existing channel data"
            );
        }
        self.negotiated = Some(data.conn_info);
        self.channel_data = Some(data);
    }

    /// Hand the channel and inode map to a successor process.
    ///
    /// The inode map is serialized first; if that fails the mount keeps its
    /// channel data. After a successful handoff the mount no longer reports a
    /// negotiated version.
    pub fn take_over(&mut self) -> FsResult<TakeoverData> {
        let inode_map = self.inode_map.serialize()?;
        let channel = match self.channel_data.take() {
            Some(data) => data,
            None => self.channel.steal_channel_data()?,
        };
        self.negotiated = None;

        info!(mount_point = %self.mount_point.display(), "Channel handed off");
        Ok(TakeoverData { channel, inode_map })
    }
}

impl fmt::Debug for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount")
            .field("mount_point", &self.mount_point)
            .field("owner_uid", &self.owner_uid)
            .field("owner_gid", &self.owner_gid)
            .field("channel_data", &self.channel_data)
            .field("negotiated", &self.negotiated)
            .finish_non_exhaustive()
    }
}
