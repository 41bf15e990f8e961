//! Locating the board's mass-storage volume
//!
//! Each supported OS exposes mounted volumes differently, so discovery sits
//! behind the [`VolumeLocator`] trait with one implementation per platform.
//! [`platform_locator()`] picks the right one at build time.
//!
//! When more than one board is connected, the first volume in enumeration
//! order is used. This is the same choice the flashing tools make, so the
//! detected revision matches the board that ends up being flashed.

mod mount_table;
mod volumes;

pub use mount_table::{first_matching_mount, MountTableLocator};
pub use volumes::VolumesDirLocator;

use crate::error::Result;
use std::path::PathBuf;

/// Substring identifying a micro:bit volume name or mount point
pub const BOARD_MARKER: &str = "MICROBIT";

/// Finds the mount path of the first connected board
pub trait VolumeLocator {
    /// Return the mount path of the first matching volume
    ///
    /// # Errors
    /// - [`Error::NotDetected`](crate::Error::NotDetected) if no volume matches
    /// - [`Error::Io`](crate::Error::Io) if the volumes could not be listed
    fn locate(&self) -> Result<PathBuf>;
}

/// Locator for the OS this binary was built for
#[cfg(target_os = "macos")]
pub fn platform_locator() -> Box<dyn VolumeLocator> {
    Box::new(VolumesDirLocator::default())
}

/// Locator for the OS this binary was built for
#[cfg(not(target_os = "macos"))]
pub fn platform_locator() -> Box<dyn VolumeLocator> {
    Box::new(MountTableLocator)
}
