//! Atomic file writes for generated project files.
//!
//! Generated files are written to a temporary sibling, synced, and renamed
//! over the target. A `ninja` run racing a regeneration therefore sees either
//! the old build file or the new one, never a truncated one.
//!
//! On crash a `.{filename}.tmp` file may be left next to the target.

use crate::error::{NinjagenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn scaffold_err(action: &str, path: &Path, e: std::io::Error) -> NinjagenError {
    NinjagenError::ScaffoldError(format!("failed to {} '{}': {}", action, path.display(), e))
}

/// Atomically write bytes to `path`, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| scaffold_err("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    // `rename` replaces an existing target on every supported platform.
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        scaffold_err("replace", path, e)
    })
}

/// Atomically write a string to `path`.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary sibling used while writing `target`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            NinjagenError::ScaffoldError(format!("invalid file path '{}'", target.display()))
        })?;
    let parent = target.parent().unwrap_or(Path::new("."));
    Ok(parent.join(format!(".{filename}.tmp")))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| scaffold_err("create", path, e))?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            scaffold_err("write", path, e)
        })
}
