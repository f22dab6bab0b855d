//! Project scaffolding and build file generation.
//!
//! `new` and `init` lay out a small C++ project (manifest, sources,
//! `.gitignore`) and then generate its build file. `generate` reruns only the
//! last step, picking up any sources added under `src/`.

pub mod graph;
pub mod templates;

#[cfg(test)]
mod tests;

use crate::config::{Config, MANIFEST_FILE};
use crate::error::{NinjagenError, Result};
use crate::fs::atomic_write_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use graph::{BuildGraph, render, starter_graph};

/// Extension of compiled source files.
const SOURCE_EXTENSION: &str = "cpp";

/// Outcome of generating a build file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Absolute path of the written build file.
    pub build_file: PathBuf,
    /// Targets built by a bare `ninja` run.
    pub targets: Vec<String>,
    /// Sources compiled by the build file, relative to the project root.
    pub sources: Vec<String>,
}

/// Sources under `root/src`, as sorted `/`-separated relative paths.
pub fn discover_sources(root: &Path) -> Result<Vec<String>> {
    let src_dir = root.join("src");
    if !src_dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&src_dir).map_err(|e| {
        NinjagenError::UserError(format!(
            "failed to read source directory '{}': {}",
            src_dir.display(),
            e
        ))
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            NinjagenError::UserError(format!(
                "failed to read source directory '{}': {}",
                src_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
        {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                sources.push(format!("src/{name}"));
            }
        }
    }
    sources.sort();
    Ok(sources)
}

/// Write the build file for the project at `root`.
pub fn generate(root: &Path, config: &Config) -> Result<Generated> {
    let sources = discover_sources(root)?;
    let graph = starter_graph(config, &sources)?;
    let text = render(&graph, config.line_width)?;
    for command in graph.resolved_commands(config.undefined_variables)? {
        debug!(%command, "edge command");
    }

    let build_file = root.join(&config.build_file);
    atomic_write_file(&build_file, &text)?;
    info!(
        path = %build_file.display(),
        sources = sources.len(),
        "generated build file"
    );

    Ok(Generated {
        build_file,
        targets: graph.defaults,
        sources,
    })
}

/// Lay out a new project at `root` and generate its build file.
///
/// Existing source files and `.gitignore` are left untouched, so this can run
/// over a directory that already holds code.
pub fn scaffold(root: &Path, config: &Config) -> Result<Generated> {
    config.validate()?;

    fs::create_dir_all(root).map_err(|e| {
        NinjagenError::ScaffoldError(format!(
            "failed to create directory '{}': {}",
            root.display(),
            e
        ))
    })?;

    atomic_write_file(root.join(MANIFEST_FILE), &config.to_yaml()?)?;

    write_if_missing(
        &root.join(".gitignore"),
        &templates::gitignore(&config.build_dir),
    )?;
    for file in templates::source_files(&config.name, config.project_type) {
        write_if_missing(&root.join(&file.path), &file.contents)?;
    }

    generate(root, config)
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        debug!(path = %path.display(), "keeping existing file");
        return Ok(());
    }
    atomic_write_file(path, contents)
}
