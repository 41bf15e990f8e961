//! Error types for micro:bit detection
//!
//! The variants form a closed taxonomy. Callers decide what to do by matching
//! on the variant, never on the message text.

use crate::details::FirmwareDetails;
use std::io;
use thiserror::Error;

/// Detection errors
#[derive(Debug, Error)]
pub enum Error {
    /// No mounted volume carries the board marker
    #[error("not detected")]
    NotDetected,

    /// The details file is missing the bootloader or interface version
    #[error("invalid details file")]
    InvalidDetails,

    /// The firmware pair is not in the table of known combinations
    #[error("unknown firmware combination: {0}")]
    UnknownFirmware(FirmwareDetails),

    /// Any other I/O failure
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted
        context: &'static str,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with a short description of what was being done
    pub fn io(context: &'static str, source: io::Error) -> Self {
        Self::Io { context, source }
    }

    /// Whether the caller may carry on with a fallback revision
    ///
    /// Only [`Error::NotDetected`] is recoverable. Everything else points at
    /// a broken mount, new firmware or a host problem.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotDetected)
    }
}

/// Result type for detection operations
pub type Result<T> = std::result::Result<T, Error>;
