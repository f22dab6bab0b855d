//! Filesystem utilities for ninjagen.
//!
//! Generated files are always written atomically so an interrupted run never
//! leaves a half-written manifest or build file behind.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
