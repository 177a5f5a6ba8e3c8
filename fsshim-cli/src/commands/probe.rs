//! Invoke a single portable filesystem operation against this platform.
//!
//! Useful when porting: each operation either succeeds or reports the
//! function and line of the code path that is still missing.

use clap::ValueEnum;
use fsshim::channel::{Mount, ROOT_INODE};
use fsshim::config::ConfigFile;
use fsshim::error::FsResult;
use std::path::PathBuf;
use tracing::debug;

use crate::error::CliError;

/// Operations that can be probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Kernel channel init handshake
    Init,
    /// List the root directory
    Readdir,
    /// Look up a name in the root directory
    Lookup,
    /// Fetch root inode attributes
    Getattr,
    /// Invalidate the root inode
    Invalidate,
    /// Hand the channel to a successor process
    Takeover,
    /// Serialize the inode map
    SerializeInodes,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Readdir => "readdir",
            Operation::Lookup => "lookup",
            Operation::Getattr => "getattr",
            Operation::Invalidate => "invalidate",
            Operation::Takeover => "takeover",
            Operation::SerializeInodes => "serialize-inodes",
        }
    }
}

pub fn run(operation: Operation, name: &str, config: &ConfigFile) -> Result<(), CliError> {
    let mount_point = config
        .mount
        .mount_point
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut mount = Mount::for_current_platform(mount_point, config.mount.uid, config.mount.gid);
    debug!(?mount, operation = operation.name(), "Probing operation");

    let outcome = invoke(&mut mount, operation, name);
    match outcome {
        Ok(summary) => {
            println!("{}: {}", operation.name(), summary);
            Ok(())
        }
        Err(error) => Err(CliError::Operation {
            operation: operation.name().to_string(),
            error,
        }),
    }
}

fn invoke(mount: &mut Mount, operation: Operation, name: &str) -> FsResult<String> {
    let summary = match operation {
        Operation::Init => {
            let info = mount.start()?;
            format!("protocol {}.{}", info.major, info.minor)
        }
        Operation::Readdir => {
            let entries = mount.read_dir(ROOT_INODE)?;
            format!("{} entries", entries.len())
        }
        Operation::Lookup => {
            let entry = mount.lookup(ROOT_INODE, name)?;
            format!("{} -> inode {}", entry.name, entry.ino)
        }
        Operation::Getattr => {
            let attr = mount.get_attr(ROOT_INODE)?;
            format!("mode {:o} size {}", attr.mode, attr.size)
        }
        Operation::Invalidate => {
            mount.invalidate_inode(ROOT_INODE)?;
            "ok".to_string()
        }
        Operation::Takeover => {
            let data = mount.take_over()?;
            format!(
                "handed off channel (protocol {}.{})",
                data.channel.conn_info.major, data.channel.conn_info.minor
            )
        }
        Operation::SerializeInodes => {
            let map = mount.serialize_inodes()?;
            format!("{:?}", map)
        }
    };
    Ok(summary)
}
