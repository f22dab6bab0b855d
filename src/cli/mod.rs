//! CLI argument parsing for ninjagen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use ninjagen::config::ProjectType;
use std::path::PathBuf;

/// ninjagen: scaffold C++ projects and generate their Ninja build files.
///
/// The project is described by `ninjagen.yaml`; `build.ninja` is derived
/// from it and from the sources found under `src/`.
#[derive(Parser, Debug)]
#[command(name = "ninjagen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug details to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ninjagen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project in a new directory.
    ///
    /// Writes the manifest, starter sources, `.gitignore` and the build file.
    New(NewArgs),

    /// Create a project in the current directory.
    ///
    /// Existing sources are kept; only missing files are written.
    Init(InitArgs),

    /// Regenerate the build file from `ninjagen.yaml`.
    Generate,

    /// Print version information.
    Version,
}

/// Project kind flags shared by `new` and `init`.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct KindArgs {
    /// Build an executable (default).
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "lib")]
    pub bin: bool,

    /// Build a static library.
    #[arg(long, action = ArgAction::SetTrue)]
    pub lib: bool,
}

impl KindArgs {
    pub fn project_type(&self) -> ProjectType {
        if self.lib {
            ProjectType::Lib
        } else {
            ProjectType::Bin
        }
    }
}

/// Arguments for the `new` command.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Directory to create; its name becomes the project name.
    pub path: PathBuf,

    #[command(flatten)]
    pub kind: KindArgs,
}

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub kind: KindArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
