//! Escape sequences of the Ninja file dialect.
//!
//! Ninja uses `$` as its only escape character:
//!
//! - `$$` is a literal `$`
//! - `$ ` is a literal space that does not separate words
//! - `$:` is a literal colon (needed in paths on `build` lines)
//! - `$` at the end of a physical line continues onto the next one
//!
//! Text handed to the line wrapper is already escaped; the helpers here decide
//! which spaces in that text are real word boundaries.

use super::error::{Result, WriteError};

/// Escape a path for use on a `build`, `default`, `include` or `subninja` line.
///
/// Paths are taken literally: every `$` is doubled, then spaces and colons
/// are escaped, so Ninja reads the same path back.
pub fn escape_path(word: &str) -> String {
    word.replace('$', "$$")
        .replace(' ', "$ ")
        .replace(':', "$:")
}

/// Escape an arbitrary value so that Ninja reads it back verbatim.
///
/// Every `$` is doubled. Newlines cannot be represented and are rejected.
pub fn escape(value: &str) -> Result<String> {
    if value.contains('\n') {
        return Err(WriteError::NewlineInValue(value.to_string()));
    }
    Ok(value.replace('$', "$$"))
}

/// Number of consecutive `$` characters immediately before byte `index`.
fn dollars_before(text: &str, index: usize) -> usize {
    text.as_bytes()[..index]
        .iter()
        .rev()
        .take_while(|&&b| b == b'$')
        .count()
}

/// Whether the space at byte `index` is a real word boundary.
///
/// A space preceded by an odd run of `$` is the escape `$ `; an even run is
/// made of `$$` pairs and leaves the space unescaped.
pub fn is_break_point(text: &str, index: usize) -> bool {
    text.as_bytes().get(index) == Some(&b' ') && dollars_before(text, index) % 2 == 0
}

/// Byte index of the first unescaped space at or after byte `start`.
pub fn first_break_from(text: &str, start: usize) -> Option<usize> {
    let start = start.min(text.len());
    text[start..]
        .match_indices(' ')
        .map(|(i, _)| start + i)
        .find(|&i| is_break_point(text, i))
}

/// Split escaped text into words at unescaped spaces.
///
/// Escape sequences are kept verbatim inside the words, so joining the result
/// with single spaces reproduces the input.
pub fn words(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    while let Some(i) = first_break_from(text, start) {
        out.push(&text[start..i]);
        start = i + 1;
    }
    out.push(&text[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_path_escapes_spaces_and_colons() {
        assert_eq!(escape_path("my file.o"), "my$ file.o");
        assert_eq!(escape_path("c:/out"), "c$:/out");
        assert_eq!(escape_path("plain"), "plain");
    }

    #[test]
    fn escape_path_doubles_every_dollar() {
        assert_eq!(escape_path("a$b.o"), "a$$b.o");
        assert_eq!(escape_path("$builddir/a.o"), "$$builddir/a.o");
    }

    #[test]
    fn escape_path_dollar_before_space() {
        assert_eq!(escape_path("a$ b"), "a$$$ b");
    }

    #[test]
    fn escape_doubles_every_dollar() {
        assert_eq!(escape("a$b$$c").unwrap(), "a$$b$$$$c");
    }

    #[test]
    fn escape_rejects_newlines() {
        let err = escape("a\nb").unwrap_err();
        assert!(matches!(err, WriteError::NewlineInValue(_)));
    }

    #[test]
    fn escaped_space_is_not_a_break_point() {
        let text = "aaaaa$ aaaaa";
        assert!(!is_break_point(text, 6));
    }

    #[test]
    fn space_after_dollar_dollar_is_a_break_point() {
        let text = "a$$ b";
        assert!(is_break_point(text, 3));
        let text = "a$$$ b";
        assert!(!is_break_point(text, 4));
    }

    #[test]
    fn first_break_skips_escaped_spaces() {
        let text = "aaaaa$ aaaaa y";
        assert_eq!(first_break_from(text, 2), Some(12));
        assert_eq!(first_break_from(text, 13), None);
    }

    #[test]
    fn words_keep_escapes_intact() {
        assert_eq!(
            words("cc a$ b.c $$x -o out"),
            vec!["cc", "a$ b.c", "$$x", "-o", "out"]
        );
        assert_eq!(words("single"), vec!["single"]);
    }
}
