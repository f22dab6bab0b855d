//! Implementation of the `ninjagen generate` command.

use super::Output;
use ninjagen::config::{Config, MANIFEST_FILE};
use ninjagen::error::{NinjagenError, Result};
use ninjagen::project;
use std::path::Path;
use tracing::debug;

/// Rewrite the build file of the project rooted at `root`.
pub fn cmd_generate(root: &Path, output: Output) -> Result<()> {
    let manifest = root.join(MANIFEST_FILE);
    if !manifest.exists() {
        return Err(NinjagenError::UserError(format!(
            "no {} found in '{}'; run `ninjagen init` first",
            MANIFEST_FILE,
            root.display()
        )));
    }

    let config = Config::load(&manifest)?;
    debug!(manifest = %manifest.display(), "loaded manifest");

    let generated = project::generate(root, &config)?;
    output.report(&generated);
    Ok(())
}
