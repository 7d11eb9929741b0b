//! Per-file pinning pipeline.
//!
//! Files are handled as text, one line at a time, so that everything the
//! pipeline does not touch (indentation, quoting, comments, line endings)
//! survives byte for byte.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{classify, extract_reference, Classification, USES_KEY};
use crate::ops::rewrite::rewrite_line;
use crate::resolver::{ResolutionError, Resolver};
use crate::util::fs;

/// Where a processed file's new content goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output<'a> {
    /// Overwrite the input file.
    InPlace,
    /// Write to a different file.
    Path(&'a Path),
    /// Compute the result but write nothing.
    Discard,
}

/// Result of pinning a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedContent {
    pub content: String,
    pub changed_lines: usize,
}

impl ProcessedContent {
    pub fn is_changed(&self) -> bool {
        self.changed_lines > 0
    }
}

/// Pin the reference on a single line (without its terminator).
///
/// Returns the rewritten line, or `None` when the line stays as it is.
pub fn pin_line(line: &str, resolver: &mut Resolver) -> Result<Option<String>, ResolutionError> {
    let Some(token) = extract_reference(line) else {
        return Ok(None);
    };

    let reference = match classify(token) {
        Classification::NoReference => return Ok(None),
        Classification::Skip(reason) => {
            tracing::debug!(reference = token, %reason, "skipping");
            return Ok(None);
        }
        Classification::Resolve(reference) => reference,
    };

    let resolved = resolver.resolve(reference.repo(), reference.git_ref())?;
    Ok(rewrite_line(line, &reference, &resolved))
}

/// Pin every reference in `content`.
///
/// Stops at the first resolution error; the partial result is dropped.
pub fn pin_content(content: &str, resolver: &mut Resolver) -> Result<ProcessedContent> {
    let mut out = String::with_capacity(content.len());
    let mut changed_lines = 0;

    for (idx, chunk) in content.split_inclusive('\n').enumerate() {
        if !chunk.contains(USES_KEY) {
            out.push_str(chunk);
            continue;
        }

        let (line, terminator) = split_terminator(chunk);
        match pin_line(line, resolver).with_context(|| format!("line {}", idx + 1))? {
            Some(rewritten) => {
                out.push_str(&rewritten);
                changed_lines += 1;
            }
            None => out.push_str(line),
        }
        out.push_str(terminator);
    }

    Ok(ProcessedContent {
        content: out,
        changed_lines,
    })
}

/// Pin the references in the file at `input`.
///
/// New content is written (per `output`) only when at least one line
/// changed. Returns whether anything changed.
pub fn process_file(input: &Path, output: Output<'_>, resolver: &mut Resolver) -> Result<bool> {
    let content = fs::read_to_string(input)?;
    let processed = pin_content(&content, resolver)?;

    if !processed.is_changed() {
        return Ok(false);
    }

    tracing::debug!(
        file = %input.display(),
        lines = processed.changed_lines,
        "pinned"
    );

    match output {
        Output::InPlace => fs::write_atomic(input, &processed.content)?,
        Output::Path(path) => fs::write_atomic(path, &processed.content)?,
        Output::Discard => {}
    }

    Ok(true)
}

fn split_terminator(chunk: &str) -> (&str, &str) {
    if let Some(line) = chunk.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = chunk.strip_suffix('\n') {
        (line, "\n")
    } else {
        (chunk, "")
    }
}
