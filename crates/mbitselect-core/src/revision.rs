//! Hardware revisions and the table of known DAPLink firmware
//!
//! Source for the firmware pairs:
//! <https://tech.microbit.org/software/daplink-interface/#daplink-software>

use crate::details::FirmwareDetails;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// micro:bit hardware revision
///
/// The string form of each variant is the build target name used by the
/// downstream toolchain, and is also what the CLI accepts as a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HardwareRevision {
    /// micro:bit v1.x (nRF51822)
    #[default]
    V1,
    /// micro:bit v2.x (nRF52833)
    V2,
}

impl HardwareRevision {
    /// Every revision, in the order they were released
    pub const ALL: [HardwareRevision; 2] = [HardwareRevision::V1, HardwareRevision::V2];

    /// Target identifier for this revision
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "microbit",
            Self::V2 => "microbit-v2",
        }
    }

    /// Comma-separated list of all target identifiers
    pub fn names() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|r| r.as_str()).collect();
        names.join(", ")
    }
}

impl fmt::Display for HardwareRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that is not one of the known revision identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown micro:bit revision '{0}' (expected one of: {names})", names = HardwareRevision::names())]
pub struct UnknownRevision(pub String);

impl FromStr for HardwareRevision {
    type Err = UnknownRevision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRevision(s.to_string()))
    }
}

/// A firmware combination published for a specific board revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownFirmware {
    /// Bootloader version as printed in the details file
    pub bootloader: &'static str,
    /// Interface version as printed in the details file
    pub interface: &'static str,
    /// Board revision shipping this combination
    pub revision: HardwareRevision,
    /// DAPLink release name
    pub daplink: &'static str,
}

const fn known(
    bootloader: &'static str,
    interface: &'static str,
    revision: HardwareRevision,
    daplink: &'static str,
) -> KnownFirmware {
    KnownFirmware {
        bootloader,
        interface,
        revision,
        daplink,
    }
}

/// All firmware combinations we know how to map
pub const KNOWN_FIRMWARE: &[KnownFirmware] = &[
    known("0234", "0234", HardwareRevision::V1, "1.3"),
    known("0234", "0241", HardwareRevision::V1, "1.3b"),
    known("0243", "0249", HardwareRevision::V1, "1.5"),
    known("0255", "0255", HardwareRevision::V2, "2.00"),
    known("0256", "0256", HardwareRevision::V2, "2.20"),
    known("0257", "0257", HardwareRevision::V2, "2.21"),
    // 2.00 bootloader with an updated interface firmware
    known("0255", "0258", HardwareRevision::V2, "2.00"),
];

static TABLE: Lazy<HashMap<FirmwareDetails, &'static KnownFirmware>> = Lazy::new(|| {
    KNOWN_FIRMWARE
        .iter()
        .map(|k| (FirmwareDetails::new(k.bootloader, k.interface), k))
        .collect()
});

/// Look up a firmware pair in the table of known combinations
pub fn lookup(details: &FirmwareDetails) -> Option<&'static KnownFirmware> {
    TABLE.get(details).copied()
}
