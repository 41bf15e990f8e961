//! Volume discovery from the `mount` utility's listing
//!
//! `mount` prints one filesystem per line:
//!
//! ```text
//! /dev/sdb on /media/user/MICROBIT type vfat (rw,nosuid,nodev,...)
//! ```
//!
//! Lines are sorted before matching so that "first" is stable across runs.

use super::{VolumeLocator, BOARD_MARKER};
use crate::error::{Error, Result};
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Column holding the mount point (`<device> on <mount point> ...`)
const MOUNT_POINT_COLUMN: usize = 2;

/// Locates the board by listing mounted filesystems with `mount`
#[derive(Debug, Clone, Copy, Default)]
pub struct MountTableLocator;

impl VolumeLocator for MountTableLocator {
    fn locate(&self) -> Result<PathBuf> {
        let output = Command::new("mount")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::io("running mount", e))?;

        if !output.status.success() {
            return Err(Error::io(
                "running mount",
                io::Error::other(format!("mount exited with {}", output.status)),
            ));
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let path = first_matching_mount(&listing).ok_or(Error::NotDetected)?;
        log::debug!("Found board volume at {}", path.display());
        Ok(path)
    }
}

/// Pick the mount point of the first board in a `mount` listing
///
/// Returns `None` when no line contains the board marker.
pub fn first_matching_mount(listing: &str) -> Option<PathBuf> {
    let mut lines: Vec<&str> = listing.lines().collect();
    lines.sort_unstable();

    let line = lines.into_iter().find(|l| l.contains(BOARD_MARKER))?;
    line.split_whitespace()
        .nth(MOUNT_POINT_COLUMN)
        .map(PathBuf::from)
}
