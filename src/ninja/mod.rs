//! Ninja build file serialization.
//!
//! This module owns everything needed to turn an already-resolved build graph
//! into Ninja syntax:
//!
//! - [`escape`](self::escape): the `$` escape alphabet and word boundaries
//! - [`wrap`]: width-bounded line wrapping with `" $"` continuations
//! - [`expand`](self::expand): single-pass `$name` substitution
//! - [`Writer`]: statement emitter over an abstract [`Sink`]
//!
//! Path resolution, build ordering and rule validation belong to the caller.

pub mod error;
pub mod escape;
pub mod expand;
pub mod scope;
pub mod sink;
pub mod types;
pub mod wrap;
pub mod writer;


pub use error::{Result, WriteError};
pub use escape::{escape, escape_path};
pub use expand::{UndefinedVariables, expand, expand_with};
pub use scope::VariableScope;
pub use sink::{IoSink, Sink};
pub use types::{BuildEdge, Rule, Value};
pub use writer::{DEFAULT_WIDTH, MIN_WIDTH, Writer};
