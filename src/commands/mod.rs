//! Command implementations for ninjagen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command works against an explicit project root so
//! it can be exercised from tests without changing the process directory.

mod generate;
mod init;
mod new;
mod version;

use crate::cli::Command;
use ninjagen::error::{NinjagenError, Result};
use ninjagen::project::Generated;
use std::path::Path;

/// Where command output goes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub quiet: bool,
}

impl Output {
    pub fn say(&self, message: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    fn report(&self, generated: &Generated) {
        self.say(format!(
            "Wrote {} ({} source{})",
            generated.build_file.display(),
            generated.sources.len(),
            if generated.sources.len() == 1 { "" } else { "s" }
        ));
        for target in &generated.targets {
            self.say(format!("  default target: {}", target));
        }
    }
}

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command, output: Output) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        NinjagenError::UserError(format!("failed to determine current directory: {}", e))
    })?;

    match command {
        Command::New(args) => new::cmd_new(&cwd.join(&args.path), args.kind.project_type(), output),
        Command::Init(args) => init::cmd_init(&cwd, args.kind.project_type(), output),
        Command::Generate => generate::cmd_generate(&cwd, output),
        Command::Version => version::cmd_version(output),
    }
}

/// Project name derived from the final component of `dir`.
fn project_name(dir: &Path) -> Result<String> {
    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            NinjagenError::UserError(format!(
                "cannot derive a project name from '{}'",
                dir.display()
            ))
        })?;

    if !ninjagen::config::is_valid_name(name) {
        return Err(NinjagenError::UserError(format!(
            "'{}' is not a valid project name: use letters, digits, '_' or '-', \
             starting with a letter or '_'",
            name
        )));
    }

    Ok(name.to_string())
}
