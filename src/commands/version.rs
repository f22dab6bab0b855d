//! Implementation of the `ninjagen version` command.

use super::Output;
use ninjagen::error::Result;

/// Print the package name and version.
pub fn cmd_version(output: Output) -> Result<()> {
    output.say(version_line());
    Ok(())
}

pub(super) fn version_line() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
