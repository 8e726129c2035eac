//! Service block merging
//!
//! [`merge`] produces a document containing exactly one occurrence of a named
//! top-level block, with all other content preserved in order. The transform
//! is pure; reading and persisting the file is the caller's concern.
//!
//! The removal pass is a two-state machine. `Copying` emits lines until it
//! meets a top-level key equal to the target, which switches to `Skipping`.
//! `Skipping` drops everything (nested lines, blanks, zero-indent comments)
//! until a *different* top-level key appears, which is emitted and switches
//! back to `Copying`. Meeting the target key again while skipping keeps the
//! machine in `Skipping`, so contiguous duplicate blocks collapse too.
//!
//! The insertion pass puts the new block immediately before the anchor key's
//! line, separated by single blank lines, or appends it at document end when
//! the anchor is absent. When the anchor name occurs more than once, the last
//! occurrence wins; that quirk is inherited from observed behavior and covered
//! by a regression test, but it is not a contract worth relying on.

use super::document::{Document, LineKind, classify};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Copying,
    Skipping,
}

/// Produce a document with exactly one `service_name` block.
///
/// `block_text` is the literal replacement block including its own top-level
/// key line. With `anchor_key` present in the document the block lands
/// immediately before it; otherwise the block is appended at the end,
/// preceded by one blank separator line.
pub fn merge(
    document: &Document,
    service_name: &str,
    block_text: &str,
    anchor_key: Option<&str>,
) -> Result<Document> {
    let filtered = strip_blocks(document, service_name)?;
    let block_lines: Vec<String> = block_text.lines().map(str::to_string).collect();

    let anchor_at = match anchor_key {
        Some(anchor) => find_last_key(&filtered, anchor)?,
        None => None,
    };

    let mut out: Vec<String> = Vec::with_capacity(filtered.len() + block_lines.len() + 2);
    match anchor_at {
        Some(at) => {
            out.extend_from_slice(&filtered[..at]);
            push_separator(&mut out);
            out.extend(block_lines);
            out.push(String::new());
            out.extend_from_slice(&filtered[at..]);
        }
        None => {
            out.extend_from_slice(&filtered);
            push_separator(&mut out);
            out.extend(block_lines);
        }
    }

    let trailing_newline = document.trailing_newline() || document.lines().is_empty();
    Ok(Document::from_lines(out, trailing_newline))
}

/// Remove every `service_name` block. The boolean reports whether any line
/// was actually dropped.
pub fn remove(document: &Document, service_name: &str) -> Result<(Document, bool)> {
    let kept = strip_blocks(document, service_name)?;
    let removed = kept.len() != document.lines().len();
    Ok((
        Document::from_lines(kept, document.trailing_newline()),
        removed,
    ))
}

/// Removal pass over the document's lines.
fn strip_blocks(document: &Document, service_name: &str) -> Result<Vec<String>> {
    let mut kept = Vec::new();
    let mut state = State::Copying;

    for (idx, line) in document.lines().iter().enumerate() {
        let kind = classify(line, idx + 1)?;
        match state {
            State::Copying => {
                if matches!(&kind, LineKind::TopLevelKey(key) if key == service_name) {
                    state = State::Skipping;
                } else {
                    kept.push(line.clone());
                }
            }
            State::Skipping => match kind {
                LineKind::TopLevelKey(key) if key == service_name => {}
                LineKind::TopLevelKey(_) => {
                    state = State::Copying;
                    kept.push(line.clone());
                }
                _ => {}
            },
        }
    }

    Ok(kept)
}

/// Line index of the last occurrence of `anchor` as a top-level key.
fn find_last_key(lines: &[String], anchor: &str) -> Result<Option<usize>> {
    let mut found = None;
    for (idx, line) in lines.iter().enumerate() {
        if matches!(classify(line, idx + 1)?, LineKind::TopLevelKey(key) if key == anchor) {
            found = Some(idx);
        }
    }
    Ok(found)
}

/// Push one blank separator line unless the output already ends with one.
fn push_separator(out: &mut Vec<String>) {
    if out.last().is_some_and(|l| !l.trim().is_empty()) {
        out.push(String::new());
    }
}
