//! macOS volume discovery via `/Volumes`

use super::{VolumeLocator, BOARD_MARKER};
use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Directory macOS mounts removable volumes under
const VOLUMES_ROOT: &str = "/Volumes";

/// Scans a directory of volume mount points for the board marker
#[derive(Debug, Clone)]
pub struct VolumesDirLocator {
    root: PathBuf,
}

impl VolumesDirLocator {
    /// Scan `root` instead of `/Volumes`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for VolumesDirLocator {
    fn default() -> Self {
        Self::new(VOLUMES_ROOT)
    }
}

impl VolumeLocator for VolumesDirLocator {
    fn locate(&self) -> Result<PathBuf> {
        let entries = fs::read_dir(&self.root)
            .map_err(|e| Error::io("listing mounted volumes", e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io("listing mounted volumes", e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        let name = names
            .into_iter()
            .find(|n| n.contains(BOARD_MARKER))
            .ok_or(Error::NotDetected)?;

        let path = self.root.join(name);
        log::debug!("Found board volume at {}", path.display());
        Ok(path)
    }
}
