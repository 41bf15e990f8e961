//! mbitselect-core - micro:bit revision detection
//!
//! This crate finds a connected BBC micro:bit, reads the `DETAILS.TXT` file
//! its DAPLink interface firmware exposes on the `MICROBIT` volume, and maps
//! the reported bootloader/interface versions to a hardware revision.
//!
//! # Pipeline
//!
//! 1. [`locate`] - find the mount path of the first `MICROBIT` volume
//! 2. [`details`] - parse the bootloader and interface versions
//! 3. [`revision`] - look the pair up in the table of known firmware
//!
//! [`resolve()`] runs all three steps and classifies the outcome through
//! [`Error`].
//!
//! # Example
//!
//! ```ignore
//! use mbitselect_core::{resolve, Error, HardwareRevision};
//!
//! let target = match resolve() {
//!     Ok(detection) => detection.revision,
//!     Err(Error::NotDetected) => HardwareRevision::default(),
//!     Err(e) => return Err(e.into()),
//! };
//! print!("{}", target);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod details;
pub mod error;
pub mod locate;
pub mod resolve;
pub mod revision;

pub use details::{parse_details, read_details_file, FirmwareDetails, DETAILS_FILE};
pub use error::{Error, Result};
pub use locate::{
    platform_locator, MountTableLocator, VolumeLocator, VolumesDirLocator, BOARD_MARKER,
};
pub use resolve::{resolve, resolve_with, Detection};
pub use revision::{lookup, HardwareRevision, KnownFirmware, UnknownRevision, KNOWN_FIRMWARE};
