//! Revision resolution: locate, parse, look up

use crate::details::{read_details_file, FirmwareDetails};
use crate::error::{Error, Result};
use crate::locate::{platform_locator, VolumeLocator};
use crate::revision::{lookup, HardwareRevision};
use std::path::PathBuf;

/// A successfully identified board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Where the board is mounted
    pub mount_path: PathBuf,
    /// Versions read from the details file
    pub firmware: FirmwareDetails,
    /// Board revision
    pub revision: HardwareRevision,
    /// DAPLink release the firmware pair belongs to
    pub daplink: &'static str,
}

/// Detect the revision of the first connected board on this platform
pub fn resolve() -> Result<Detection> {
    resolve_with(platform_locator().as_ref())
}

/// Detect the revision of the first board found by `locator`
///
/// # Errors
/// - [`Error::NotDetected`] if no board is mounted
/// - [`Error::InvalidDetails`] if the details file lacks either version
/// - [`Error::UnknownFirmware`] if the version pair is not in the table
/// - [`Error::Io`] for anything else
pub fn resolve_with(locator: &dyn VolumeLocator) -> Result<Detection> {
    let mount_path = locator.locate()?;
    let firmware = read_details_file(&mount_path)?;

    let known = lookup(&firmware).ok_or_else(|| Error::UnknownFirmware(firmware.clone()))?;

    log::info!(
        "Detected {} at {} (DAPLink {}, bootloader {}, interface {})",
        known.revision,
        mount_path.display(),
        known.daplink,
        firmware.bootloader,
        firmware.interface
    );

    Ok(Detection {
        mount_path,
        firmware,
        revision: known.revision,
        daplink: known.daplink,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::DETAILS_FILE;
    use crate::locate::VolumesDirLocator;
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    /// Create a volumes root with one board volume holding `details`
    fn board_with_details(details: &str) -> TempDir {
        let dir = tempdir().unwrap();
        let volume = dir.path().join("MICROBIT");
        fs::create_dir(&volume).unwrap();
        fs::write(volume.join(DETAILS_FILE), details).unwrap();
        dir
    }

    fn resolve_in(root: &Path) -> Result<Detection> {
        resolve_with(&VolumesDirLocator::new(root))
    }

    #[test]
    fn test_resolve_v1() {
        let dir = board_with_details("Bootloader Version: 0234\nInterface Version: 0234\n");
        let detection = resolve_in(dir.path()).unwrap();

        assert_eq!(detection.revision, HardwareRevision::V1);
        assert_eq!(detection.daplink, "1.3");
        assert_eq!(detection.mount_path, dir.path().join("MICROBIT"));
        assert_eq!(detection.firmware, FirmwareDetails::new("0234", "0234"));
    }

    #[test]
    fn test_resolve_v2() {
        let dir = board_with_details("Interface Version: 0258\r\nBootloader Version: 0255\r\n");
        let detection = resolve_in(dir.path()).unwrap();
        assert_eq!(detection.revision, HardwareRevision::V2);
    }

    #[test]
    fn test_resolve_not_detected() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("USB STICK")).unwrap();

        let err = resolve_in(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NotDetected));
    }

    #[test]
    fn test_resolve_invalid_details() {
        let dir = board_with_details("Bootloader Version: 0255\n");
        let err = resolve_in(dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidDetails));
    }

    #[test]
    fn test_resolve_missing_details_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("MICROBIT")).unwrap();

        let err = resolve_in(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_resolve_unknown_firmware() {
        let dir = board_with_details("Bootloader Version: 0300\nInterface Version: 0301\n");
        let err = resolve_in(dir.path()).unwrap_err();

        match &err {
            Error::UnknownFirmware(fw) => assert_eq!(fw, &FirmwareDetails::new("0300", "0301")),
            other => panic!("unexpected error: {:?}", other),
        }
        let message = err.to_string();
        assert!(message.contains("0300"));
        assert!(message.contains("0301"));
    }

    #[test]
    fn test_resolve_uses_last_duplicate() {
        let dir = board_with_details(
            "Bootloader Version: 0234\nBootloader Version: 0255\nInterface Version: 0255\n",
        );
        let detection = resolve_in(dir.path()).unwrap();
        assert_eq!(detection.revision, HardwareRevision::V2);
    }

    struct FixedLocator(PathBuf);

    impl VolumeLocator for FixedLocator {
        fn locate(&self) -> Result<PathBuf> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_resolve_with_custom_locator() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DETAILS_FILE),
            "Bootloader Version: 0257\nInterface Version: 0257\n",
        )
        .unwrap();

        let detection = resolve_with(&FixedLocator(dir.path().to_path_buf())).unwrap();
        assert_eq!(detection.revision, HardwareRevision::V2);
        assert_eq!(detection.daplink, "2.21");
    }
}
