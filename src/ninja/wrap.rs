//! Width-bounded line wrapping.
//!
//! A logical line that does not fit is broken at unescaped spaces. Every
//! physical line except the last ends with the continuation marker `" $"`, and
//! continuation lines are indented four columns past the statement's own
//! indentation. A word that cannot be broken is emitted whole, even when it
//! overflows the width.

use super::escape::words;

/// Marker ending a physical line that continues on the next one.
pub const CONTINUATION: &str = " $";

/// Leading spaces contributed by one indent level.
pub const INDENT: &str = "  ";

/// Extra leading spaces on every continuation line.
pub const CONTINUATION_INDENT: &str = "    ";

/// Prefix of every comment line.
pub const COMMENT_PREFIX: &str = "# ";

/// Byte offset of the character at column `col`, or the end of `text`.
fn byte_offset(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Byte offsets of the unescaped spaces separating the words of `text`.
fn break_points(text: &str) -> Vec<usize> {
    let mut points = Vec::new();
    let mut offset = 0;
    for word in words(text) {
        if offset > 0 {
            points.push(offset - 1);
        }
        offset += word.len() + 1;
    }
    points
}

/// Wrap one logical line into newline-terminated physical lines.
///
/// `text` is already escaped and must not contain a newline. Columns are
/// counted as the characters appear in the output, so `$ ` occupies two.
pub fn wrap_line(text: &str, indent: usize, width: usize) -> Vec<String> {
    let base = INDENT.repeat(indent);
    let mut leading = base.clone();
    let mut rest = text;
    let mut lines = Vec::new();

    while leading.len() + rest.chars().count() > width {
        let available = width.saturating_sub(leading.len() + CONTINUATION.len());
        // A break at column `available` still fits: the line ends exactly at `width`.
        let fit_end = byte_offset(rest, available + 1);
        let points = break_points(rest);

        // Prefer the last break that fits; otherwise overflow to the next one.
        let Some(&split) = points
            .iter()
            .rev()
            .find(|&&i| i < fit_end)
            .or(points.first())
        else {
            break;
        };

        lines.push(format!("{leading}{}{CONTINUATION}\n", &rest[..split]));
        rest = &rest[split + 1..];
        leading = format!("{base}{CONTINUATION_INDENT}");
    }

    lines.push(format!("{leading}{rest}\n"));
    lines
}

/// Fill free text into `# `-prefixed comment lines.
///
/// Words are separated by any whitespace and never split, so long paths stay
/// on a line of their own. Comment lines carry no continuation marker. Blank
/// text produces no lines.
pub fn wrap_comment(text: &str, width: usize) -> Vec<String> {
    let limit = width.saturating_sub(COMMENT_PREFIX.len());
    let mut filled = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !current.is_empty() && current_len + 1 + word_len > limit {
            filled.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        filled.push(current);
    }

    filled
        .into_iter()
        .map(|line| format!("{COMMENT_PREFIX}{line}\n"))
        .collect()
}
