//! Enum types and default value helpers for the project manifest.

use serde::{Deserialize, Serialize};

/// Kind of artifact a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// An executable linked from `src/main.cpp` (default).
    #[default]
    Bin,
    /// A static library archived from `src/<name>.cpp`.
    Lib,
}

impl ProjectType {
    /// Human-readable description used in CLI messages.
    pub fn describe(self) -> &'static str {
        match self {
            ProjectType::Bin => "binary (application)",
            ProjectType::Lib => "library",
        }
    }
}

pub(crate) fn default_name() -> String {
    "app".to_string()
}
pub(crate) fn default_line_width() -> usize {
    crate::ninja::DEFAULT_WIDTH
}
pub(crate) fn default_build_file() -> String {
    "build.ninja".to_string()
}
pub(crate) fn default_build_dir() -> String {
    "build".to_string()
}
pub(crate) fn default_cxx() -> String {
    "c++".to_string()
}
pub(crate) fn default_cxxflags() -> String {
    "-std=c++17 -Wall -Wextra".to_string()
}
