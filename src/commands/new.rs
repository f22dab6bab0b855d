//! Implementation of the `ninjagen new` command.

use super::{Output, project_name};
use ninjagen::config::{Config, ProjectType};
use ninjagen::error::{NinjagenError, Result};
use ninjagen::project;
use std::path::Path;
use tracing::info;

/// Create a project in the directory `path`, which must not exist yet.
pub fn cmd_new(path: &Path, project_type: ProjectType, output: Output) -> Result<()> {
    if path.exists() {
        return Err(NinjagenError::UserError(format!(
            "destination '{}' already exists; use `ninjagen init` inside it instead",
            path.display()
        )));
    }

    let name = project_name(path)?;
    let config = Config::for_project(&name, project_type);
    info!(name = %name, kind = project_type.describe(), "creating project");

    let generated = project::scaffold(path, &config)?;

    output.say(format!(
        "Created {} `{}` in {}",
        project_type.describe(),
        name,
        path.display()
    ));
    output.report(&generated);
    Ok(())
}
