//! mbitselect - print the build target for the connected micro:bit
//!
//! Detects which revision of the BBC micro:bit is mounted and prints the
//! matching build target (`microbit` or `microbit-v2`) to stdout, for use from
//! build scripts:
//!
//! ```bash
//! tinygo flash -target=$(mbitselect --fallback=microbit-v2) .
//! ```
//!
//! Stdout carries nothing but the target name. All diagnostics go to stderr
//! through the logger.

mod cli;

use clap::Parser;
use cli::Cli;
use mbitselect_core::{resolve, Detection, Error, HardwareRevision, DETAILS_FILE};
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse();

    // Errors only, unless asked for more
    let level = if cli.verbose { "info" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let target = match select_target(cli.fallback, resolve()) {
        Ok(target) => target,
        Err(_) => std::process::exit(1),
    };

    if let Err(e) = write_target(&mut io::stdout().lock(), target) {
        log::error!("Failed to print resolved target: {}", e);
        std::process::exit(1);
    }
}

/// Decide which target to print from the detection outcome
///
/// Only a missing board falls back. Every other failure is logged with a
/// hint and returned.
fn select_target(
    fallback: HardwareRevision,
    outcome: mbitselect_core::Result<Detection>,
) -> Result<HardwareRevision, Error> {
    match outcome {
        Ok(detection) => Ok(detection.revision),
        Err(Error::NotDetected) => {
            log::info!("Unable to detect a connected micro:bit, using fallback '{}'", fallback);
            log::info!("  note: try un-mounting and re-mounting the device");
            Ok(fallback)
        }
        Err(e @ Error::InvalidDetails) => {
            log::error!("The {} file could not be parsed: {}", DETAILS_FILE, e);
            log::error!(
                "  note: try un-mounting and re-mounting the device, and make sure its filesystem is mounted correctly"
            );
            Err(e)
        }
        Err(e @ Error::UnknownFirmware(_)) => {
            log::error!("{}", e);
            log::error!(
                "  note: please report this combination along with a copy of the board's {} file",
                DETAILS_FILE
            );
            Err(e)
        }
        Err(e) => {
            log::error!("Failed to detect micro:bit revision: {}", e);
            Err(e)
        }
    }
}

/// Write the target name with no trailing newline
fn write_target<W: Write>(out: &mut W, target: HardwareRevision) -> io::Result<()> {
    out.write_all(target.as_str().as_bytes())?;
    out.flush()
}
