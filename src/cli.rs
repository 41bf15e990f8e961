//! CLI argument parsing

use clap::Parser;
use mbitselect_core::HardwareRevision;

/// Generate help text for the fallback argument
fn fallback_help() -> String {
    format!(
        "Target to print if no micro:bit is detected [possible values: {}]",
        HardwareRevision::names()
    )
}

#[derive(Parser)]
#[command(name = "mbitselect")]
#[command(
    author,
    version,
    about = "Print the build target for the connected micro:bit",
    long_about = "Detects the revision of the connected micro:bit and prints the \
                  corresponding build target. If no micro:bit is mounted, the \
                  fallback target is printed instead. With several boards \
                  connected, the first one found is used, the same one a \
                  flashing tool would pick."
)]
pub struct Cli {
    #[arg(long, value_name = "TARGET", default_value_t = HardwareRevision::default(), help = fallback_help())]
    pub fallback: HardwareRevision,

    /// Log informational messages to stderr, not just errors
    #[arg(short, long)]
    pub verbose: bool,
}
