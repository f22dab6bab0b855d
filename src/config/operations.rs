//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{NinjagenError, Result};
use crate::ninja::MIN_WIDTH;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "ninjagen.yaml";

/// Regex pattern for valid project names.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("Invalid name regex"));

/// Whether `name` can be used as a project name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            NinjagenError::ConfigError(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| NinjagenError::ConfigError(format!("failed to parse YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| NinjagenError::ConfigError(format!("failed to serialize YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `name` must be an identifier (letters, digits, `_`, `-`; not starting with a digit)
    /// - `line_width` must fit the continuation marker
    /// - `build_file` and `build_dir` must be non-empty
    /// - `cxxflags` must be valid shell words
    pub fn validate(&self) -> Result<()> {
        if !is_valid_name(&self.name) {
            return Err(NinjagenError::ConfigError(format!(
                "name '{}' must start with a letter or '_' and contain only letters, digits, '_' or '-'",
                self.name
            )));
        }

        if self.line_width < MIN_WIDTH {
            return Err(NinjagenError::ConfigError(format!(
                "line_width must be at least {} (found {})",
                MIN_WIDTH, self.line_width
            )));
        }

        if self.build_file.trim().is_empty() {
            return Err(NinjagenError::ConfigError(
                "build_file must be non-empty".to_string(),
            ));
        }

        if self.build_dir.trim().is_empty() {
            return Err(NinjagenError::ConfigError(
                "build_dir must be non-empty".to_string(),
            ));
        }

        self.cxxflags_list()?;
        Ok(())
    }

    /// `cxxflags` split into individual arguments.
    pub fn cxxflags_list(&self) -> Result<Vec<String>> {
        shell_words::split(&self.cxxflags).map_err(|e| {
            NinjagenError::ConfigError(format!("cxxflags '{}' cannot be parsed: {}", self.cxxflags, e))
        })
    }
}
