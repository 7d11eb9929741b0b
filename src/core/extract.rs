//! Pulling the reference token out of a workflow line.
//!
//! Workflows are treated as plain text, never parsed as YAML, so that every
//! byte outside the reference survives a rewrite.

/// Key that introduces a step or reusable-workflow reference.
pub const USES_KEY: &str = "uses:";

/// Extract the reference token from a line containing [`USES_KEY`].
///
/// Everything after the key is taken, cut at the first inline comment,
/// trimmed, and stripped of one layer of enclosing quotes. Returns `None`
/// when there is nothing to pin on the line.
pub fn extract_reference(line: &str) -> Option<&str> {
    let start = line.find(USES_KEY)? + USES_KEY.len();
    let mut rest = &line[start..];

    if let Some(idx) = find_comment(rest) {
        rest = &rest[..idx];
    }

    let token = strip_quotes(rest.trim());
    if token.is_empty() || token == line {
        return None;
    }

    Some(token)
}

/// Byte offset of the first inline comment in `text`.
///
/// An inline comment starts at whitespace followed by `#`; the returned
/// offset points at that whitespace.
pub fn find_comment(text: &str) -> Option<usize> {
    text.as_bytes()
        .windows(2)
        .position(|pair| (pair[0] == b' ' || pair[0] == b'\t') && pair[1] == b'#')
}

/// Strip one layer of matching single or double quotes.
fn strip_quotes(token: &str) -> &str {
    for quote in ['"', '\''] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return &token[1..token.len() - 1];
        }
    }
    token
}
