//! `$name` expansion against global and local scopes.
//!
//! Expansion is a single left-to-right pass:
//!
//! - `$$` becomes `$`
//! - `$ ` becomes a space
//! - `$name` becomes the value bound to `name`, local scope first
//! - `$` before any other character is dropped (`$:` becomes `:`)
//!
//! Substituted values are emitted as-is and never expanded again.

use super::error::{Result, WriteError};
use super::scope::VariableScope;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// What to do with a `$name` that neither scope binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedVariables {
    /// Expand to the empty string, as Ninja itself does.
    #[default]
    Empty,
    /// Fail with [`WriteError::UndefinedVariable`].
    Error,
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn lookup<'a>(
    name: &str,
    vars: &'a VariableScope,
    local_vars: &'a VariableScope,
) -> Option<&'a str> {
    local_vars.get(name).or_else(|| vars.get(name))
}

fn substitute<'a, E>(
    template: &str,
    resolve: impl Fn(&str) -> Option<&'a str>,
    mut undefined: impl FnMut(&str, usize) -> std::result::Result<(), E>,
) -> std::result::Result<String, E> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some((_, '$')) => {
                chars.next();
                out.push('$');
            }
            Some((_, ' ')) => {
                chars.next();
                out.push(' ');
            }
            Some((start, c)) if is_identifier_char(c) => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !is_identifier_char(c) {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                let name = &template[start..end];
                match resolve(name) {
                    Some(value) => out.push_str(value),
                    None => undefined(name, pos)?,
                }
            }
            // Lone `$`: drop it and let the next character through.
            _ => {}
        }
    }

    Ok(out)
}

/// Expand `template`, treating unbound names as empty.
///
/// ```
/// use ninjagen::ninja::{expand, VariableScope};
///
/// let vars: VariableScope = [("x", "a")].into_iter().collect();
/// let locals: VariableScope = [("x", "b")].into_iter().collect();
/// assert_eq!(expand("$x", &vars, &VariableScope::new()), "a");
/// assert_eq!(expand("$x", &vars, &locals), "b");
/// ```
pub fn expand(template: &str, vars: &VariableScope, local_vars: &VariableScope) -> String {
    let expanded = substitute(
        template,
        |name| lookup(name, vars, local_vars),
        |_, _| Ok::<(), Infallible>(()),
    );
    match expanded {
        Ok(s) => s,
        Err(never) => match never {},
    }
}

/// Expand `template` under an explicit undefined-variable policy.
pub fn expand_with(
    template: &str,
    vars: &VariableScope,
    local_vars: &VariableScope,
    policy: UndefinedVariables,
) -> Result<String> {
    substitute(
        template,
        |name| lookup(name, vars, local_vars),
        |name, position| match policy {
            UndefinedVariables::Empty => Ok(()),
            UndefinedVariables::Error => Err(WriteError::UndefinedVariable {
                name: name.to_string(),
                position,
            }),
        },
    )
}
