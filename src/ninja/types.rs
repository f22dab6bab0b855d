//! Value types handed to the writer.
//!
//! Rules and build edges are plain immutable data. The caller resolves paths
//! and rule names; the writer only serializes them.

use super::scope::VariableScope;
use std::borrow::Cow;

/// Right-hand side of a variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single string, written verbatim.
    Single(String),
    /// A list of strings. Empty entries are dropped and the rest joined with spaces.
    List(Vec<String>),
}

impl Value {
    /// The text that follows `name = `.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Value::Single(s) => Cow::Borrowed(s.as_str()),
            Value::List(items) => Cow::Owned(
                items
                    .iter()
                    .filter(|item| !item.is_empty())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Single(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Single(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Single(s.clone())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(items: [&str; N]) -> Self {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }
}

fn to_strings<I, P>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = P>,
    P: Into<String>,
{
    paths.into_iter().map(Into::into).collect()
}

/// A `rule` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub command: String,
    pub description: Option<String>,
    pub depfile: Option<String>,
    pub generator: bool,
    pub pool: Option<String>,
    pub restat: bool,
    pub rspfile: Option<String>,
    pub rspfile_content: Option<String>,
    pub deps: Option<String>,
}

impl Rule {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            description: None,
            depfile: None,
            generator: false,
            pool: None,
            restat: false,
            rspfile: None,
            rspfile_content: None,
            deps: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn depfile(mut self, depfile: impl Into<String>) -> Self {
        self.depfile = Some(depfile.into());
        self
    }

    /// Mark outputs of this rule as generator outputs (`generator = 1`).
    pub fn generator(mut self) -> Self {
        self.generator = true;
        self
    }

    pub fn pool(mut self, pool: impl Into<String>) -> Self {
        self.pool = Some(pool.into());
        self
    }

    /// Re-stat outputs after the command runs (`restat = 1`).
    pub fn restat(mut self) -> Self {
        self.restat = true;
        self
    }

    pub fn rspfile(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.rspfile = Some(path.into());
        self.rspfile_content = Some(content.into());
        self
    }

    /// Dependency format of the depfile (`gcc` or `msvc`).
    pub fn deps(mut self, deps: impl Into<String>) -> Self {
        self.deps = Some(deps.into());
        self
    }
}

/// One `build` statement with its attached variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEdge {
    pub outputs: Vec<String>,
    pub implicit_outputs: Vec<String>,
    pub rule: String,
    pub inputs: Vec<String>,
    pub implicit: Vec<String>,
    pub order_only: Vec<String>,
    pub pool: Option<String>,
    pub dyndep: Option<String>,
    pub variables: VariableScope,
}

impl BuildEdge {
    pub fn new<I, P>(outputs: I, rule: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            outputs: to_strings(outputs),
            implicit_outputs: Vec::new(),
            rule: rule.into(),
            inputs: Vec::new(),
            implicit: Vec::new(),
            order_only: Vec::new(),
            pool: None,
            dyndep: None,
            variables: VariableScope::new(),
        }
    }

    pub fn inputs<I, P>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.inputs.extend(to_strings(inputs));
        self
    }

    /// Inputs that trigger a rebuild but do not appear in `$in`.
    pub fn implicit<I, P>(mut self, implicit: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.implicit.extend(to_strings(implicit));
        self
    }

    /// Inputs that must exist first but never trigger a rebuild.
    pub fn order_only<I, P>(mut self, order_only: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.order_only.extend(to_strings(order_only));
        self
    }

    pub fn implicit_outputs<I, P>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.implicit_outputs.extend(to_strings(outputs));
        self
    }

    pub fn pool(mut self, pool: impl Into<String>) -> Self {
        self.pool = Some(pool.into());
        self
    }

    pub fn dyndep(mut self, dyndep: impl Into<String>) -> Self {
        self.dyndep = Some(dyndep.into());
        self
    }

    /// Attach a variable to this edge only. Declaration order is kept.
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.variables.insert(name, value.joined().into_owned());
        self
    }
}
