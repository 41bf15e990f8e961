//! DAPLink details file parsing
//!
//! The interface firmware exposes a `DETAILS.TXT` file at the root of the
//! `MICROBIT` volume. Among other things it contains:
//!
//! ```text
//! Bootloader Version: 0255
//! Interface Version: 0258
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Name of the details file at the root of the board's volume
pub const DETAILS_FILE: &str = "DETAILS.TXT";

const HEADER_BOOTLOADER: &str = "Bootloader Version";
const HEADER_INTERFACE: &str = "Interface Version";
const FIELD_DELIMITER: &str = ": ";

/// Bootloader and interface versions reported by the board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FirmwareDetails {
    /// Bootloader version, e.g. `0255`
    pub bootloader: String,
    /// Interface version, e.g. `0258`
    pub interface: String,
}

impl FirmwareDetails {
    /// Create a new firmware pair
    pub fn new(bootloader: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            bootloader: bootloader.into(),
            interface: interface.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.bootloader.is_empty() && !self.interface.is_empty()
    }
}

impl fmt::Display for FirmwareDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(bootloader: {:?}; interface: {:?})",
            self.bootloader, self.interface
        )
    }
}

/// Value after the last `": "` on a line
fn field_value(line: &str) -> &str {
    line.rsplit(FIELD_DELIMITER).next().unwrap_or(line)
}

/// Parse firmware details from the contents of a details file
///
/// When a field appears more than once, the last occurrence wins.
///
/// # Errors
/// - [`Error::Io`] if reading fails
/// - [`Error::InvalidDetails`] if either version is missing or empty
pub fn parse_details<R: BufRead>(mut reader: R) -> Result<FirmwareDetails> {
    let mut details = FirmwareDetails::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io("reading details file", e))?;
        if n == 0 {
            break;
        }

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_matches(|c| c == '\r' || c == '\n');

        if line.starts_with(HEADER_BOOTLOADER) {
            details.bootloader = field_value(line).to_string();
        }
        if line.starts_with(HEADER_INTERFACE) {
            details.interface = field_value(line).to_string();
        }
    }

    if !details.is_complete() {
        return Err(Error::InvalidDetails);
    }
    Ok(details)
}

/// Read and parse the details file at the root of a mounted board
pub fn read_details_file(mount_path: &Path) -> Result<FirmwareDetails> {
    let path = mount_path.join(DETAILS_FILE);
    log::debug!("Reading {}", path.display());

    let file = File::open(&path).map_err(|e| Error::io("opening details file", e))?;
    parse_details(BufReader::new(file))
}
