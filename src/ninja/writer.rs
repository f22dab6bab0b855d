//! Statement emitter for Ninja build files.
//!
//! [`Writer`] turns rules, build edges and variables into Ninja syntax and
//! appends the result to a [`Sink`]. It keeps no memory between statements:
//! each call formats one statement, wraps it to the configured width, and
//! appends it.

use super::error::{Result, WriteError};
use super::escape::escape_path;
use super::sink::Sink;
use super::types::{BuildEdge, Rule, Value};
use super::wrap::{CONTINUATION, wrap_comment, wrap_line};
use tracing::trace;

/// Conventional width of a Ninja file.
pub const DEFAULT_WIDTH: usize = 78;

/// Smallest width that can hold the continuation marker and one character.
pub const MIN_WIDTH: usize = CONTINUATION.len() + 1;

fn escaped_paths(paths: &[String]) -> Vec<String> {
    paths.iter().map(|p| escape_path(p)).collect()
}

/// Serializes Ninja statements to a sink.
///
/// The writer owns its sink, so emission calls are naturally serialized.
#[derive(Debug)]
pub struct Writer<S: Sink> {
    sink: S,
    width: usize,
}

impl<S: Sink> Writer<S> {
    /// Create a writer with the default width of 78 columns.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            width: DEFAULT_WIDTH,
        }
    }

    /// Create a writer with a custom width.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::WidthTooSmall`] if `width` cannot hold the
    /// continuation marker.
    pub fn with_width(sink: S, width: usize) -> Result<Self> {
        if width < MIN_WIDTH {
            return Err(WriteError::WidthTooSmall {
                width,
                min: MIN_WIDTH,
            });
        }
        Ok(Self { sink, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.sink.append(text.as_bytes())?;
        Ok(())
    }

    /// Write one logical line, wrapping it to the configured width.
    pub fn line(&mut self, text: &str, indent: usize) -> Result<()> {
        let physical = wrap_line(text, indent, self.width).concat();
        self.write(&physical)
    }

    /// Write an empty line.
    pub fn newline(&mut self) -> Result<()> {
        self.write("\n")
    }

    /// Write a `#` comment, filled on word boundaries.
    pub fn comment(&mut self, text: &str) -> Result<()> {
        let lines = wrap_comment(text, self.width).concat();
        self.write(&lines)
    }

    /// Write `name = value` at the given indent level.
    pub fn variable(&mut self, name: &str, value: impl Into<Value>, indent: usize) -> Result<()> {
        let value = value.into();
        self.line(&format!("{} = {}", name, value.joined()), indent)
    }

    /// Write a `pool` declaration.
    pub fn pool(&mut self, name: &str, depth: usize) -> Result<()> {
        trace!(pool = name, depth, "emitting pool");
        self.line(&format!("pool {name}"), 0)?;
        self.variable("depth", depth.to_string(), 1)
    }

    /// Write a `rule` declaration and its bindings.
    pub fn rule(&mut self, rule: &Rule) -> Result<()> {
        trace!(rule = %rule.name, "emitting rule");
        self.line(&format!("rule {}", rule.name), 0)?;
        self.variable("command", rule.command.as_str(), 1)?;
        if let Some(description) = &rule.description {
            self.variable("description", description, 1)?;
        }
        if let Some(depfile) = &rule.depfile {
            self.variable("depfile", depfile, 1)?;
        }
        if rule.generator {
            self.variable("generator", "1", 1)?;
        }
        if let Some(pool) = &rule.pool {
            self.variable("pool", pool, 1)?;
        }
        if rule.restat {
            self.variable("restat", "1", 1)?;
        }
        if let Some(rspfile) = &rule.rspfile {
            self.variable("rspfile", rspfile, 1)?;
        }
        if let Some(content) = &rule.rspfile_content {
            self.variable("rspfile_content", content, 1)?;
        }
        if let Some(deps) = &rule.deps {
            self.variable("deps", deps, 1)?;
        }
        Ok(())
    }

    /// Write a `build` statement followed by its per-edge variables.
    pub fn build(&mut self, edge: &BuildEdge) -> Result<()> {
        trace!(
            rule = %edge.rule,
            outputs = edge.outputs.len(),
            inputs = edge.inputs.len(),
            "emitting build edge"
        );

        let mut outputs = escaped_paths(&edge.outputs);
        if !edge.implicit_outputs.is_empty() {
            outputs.push("|".to_string());
            outputs.extend(escaped_paths(&edge.implicit_outputs));
        }

        let mut inputs = vec![edge.rule.clone()];
        inputs.extend(escaped_paths(&edge.inputs));
        if !edge.implicit.is_empty() {
            inputs.push("|".to_string());
            inputs.extend(escaped_paths(&edge.implicit));
        }
        if !edge.order_only.is_empty() {
            inputs.push("||".to_string());
            inputs.extend(escaped_paths(&edge.order_only));
        }

        self.line(
            &format!("build {}: {}", outputs.join(" "), inputs.join(" ")),
            0,
        )?;

        if let Some(pool) = &edge.pool {
            self.variable("pool", pool, 1)?;
        }
        if let Some(dyndep) = &edge.dyndep {
            self.variable("dyndep", dyndep, 1)?;
        }
        for (name, value) in edge.variables.iter() {
            self.variable(name, value, 1)?;
        }
        Ok(())
    }

    /// Write an `include` statement.
    pub fn include(&mut self, path: &str) -> Result<()> {
        self.line(&format!("include {}", escape_path(path)), 0)
    }

    /// Write a `subninja` statement.
    pub fn subninja(&mut self, path: &str) -> Result<()> {
        self.line(&format!("subninja {}", escape_path(path)), 0)
    }

    /// Write a `default` statement naming the targets built by a bare `ninja`.
    pub fn default<P: AsRef<str>>(&mut self, paths: &[P]) -> Result<()> {
        let paths: Vec<String> = paths.iter().map(|p| escape_path(p.as_ref())).collect();
        self.line(&format!("default {}", paths.join(" ")), 0)
    }
}
