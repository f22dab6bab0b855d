//! Implementation of the `ninjagen init` command.
//!
//! Turns the current directory into a project. Files that already exist
//! (sources, `.gitignore`) are kept as they are; only the manifest is
//! required to be absent.

use super::{Output, project_name};
use ninjagen::config::{Config, MANIFEST_FILE, ProjectType};
use ninjagen::error::{NinjagenError, Result};
use ninjagen::project;
use std::path::Path;
use tracing::info;

/// Initialize a project rooted at `root`.
pub fn cmd_init(root: &Path, project_type: ProjectType, output: Output) -> Result<()> {
    let manifest = root.join(MANIFEST_FILE);
    if manifest.exists() {
        return Err(NinjagenError::UserError(format!(
            "'{}' already exists; run `ninjagen generate` to refresh the build file",
            manifest.display()
        )));
    }

    let name = project_name(root)?;
    let config = Config::for_project(&name, project_type);
    info!(name = %name, kind = project_type.describe(), "initializing project");

    let generated = project::scaffold(root, &config)?;

    output.say(format!(
        "Initialized {} `{}` in {}",
        project_type.describe(),
        name,
        root.display()
    ));
    output.report(&generated);
    Ok(())
}
