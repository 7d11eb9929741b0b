//! Line rewriting.

use crate::core::{find_comment, DependencyReference, USES_KEY};
use crate::resolver::ResolvedRef;

/// Rewrite `line` with `reference` pinned to `resolved`.
///
/// The raw token is replaced by `owner/repo[/subpath]@sha`. When the
/// resolution carries a label that differs from the SHA, any trailing
/// comment is replaced by `# <label>`; otherwise trailing comments stay.
/// Returns `None` when the result is byte-identical to `line`.
pub fn rewrite_line(
    line: &str,
    reference: &DependencyReference,
    resolved: &ResolvedRef,
) -> Option<String> {
    let raw = reference.raw_text();
    let search_from = line.find(USES_KEY).unwrap_or(0);
    let start = search_from + line[search_from..].find(raw)?;
    let end = start + raw.len();

    let mut new_line = String::with_capacity(line.len() + resolved.sha.len());
    new_line.push_str(&line[..start]);
    new_line.push_str(&reference.pinned(&resolved.sha));

    let tail = &line[end..];
    match resolved.label.as_deref().filter(|label| *label != resolved.sha) {
        Some(label) => {
            let kept = match find_comment(tail) {
                Some(idx) => &tail[..idx],
                None => tail,
            };
            new_line.push_str(kept);
            new_line.push_str(" # ");
            new_line.push_str(label);
        }
        None => new_line.push_str(tail),
    }

    (new_line != line).then_some(new_line)
}
