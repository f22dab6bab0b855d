//! ninjagen: Ninja build file generator and C++ project scaffolder.
//!
//! The [`ninja`] module is a standalone writer for Ninja build files. The
//! remaining modules build the `ninjagen` CLI on top of it: a YAML project
//! manifest, atomic file output, and the starter build graph for scaffolded
//! projects.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod ninja;
pub mod project;

#[cfg(test)]
mod test_support;
