//! Config struct definition and default implementation.

use super::types::*;
use crate::ninja::UndefinedVariables;
use serde::{Deserialize, Serialize};

/// Project manifest.
///
/// This struct represents the contents of `ninjagen.yaml` at the project root.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Project settings
    // =========================================================================
    /// Package name, also used for the produced artifact.
    #[serde(default = "default_name")]
    pub name: String,

    /// Whether the project builds an executable or a library.
    #[serde(default)]
    pub project_type: ProjectType,

    // =========================================================================
    // Build file settings
    // =========================================================================
    /// Column limit for the generated build file (default: 78).
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Path of the generated build file relative to the project root.
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// Directory for object files and artifacts (`$builddir`).
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// How `$name` references with no binding are resolved.
    #[serde(default)]
    pub undefined_variables: UndefinedVariables,

    // =========================================================================
    // Toolchain settings
    // =========================================================================
    /// C++ compiler driver.
    #[serde(default = "default_cxx")]
    pub cxx: String,

    /// Compiler flags, shell-quoted.
    #[serde(default = "default_cxxflags")]
    pub cxxflags: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            project_type: ProjectType::default(),
            line_width: default_line_width(),
            build_file: default_build_file(),
            build_dir: default_build_dir(),
            undefined_variables: UndefinedVariables::default(),
            cxx: default_cxx(),
            cxxflags: default_cxxflags(),
        }
    }
}

impl Config {
    /// Default manifest for a new project.
    pub fn for_project(name: impl Into<String>, project_type: ProjectType) -> Self {
        Self {
            name: name.into(),
            project_type,
            ..Self::default()
        }
    }
}
