//! Bracket-balanced scanning: the span primitive and statement segmentation.
//!
//! `matching_paren` is the one nesting primitive in the crate. Every level of
//! WKT structure (statement bodies, polygon ring groups, multipolygon groups,
//! collection members) is found by reapplying it, so nesting behaves the same
//! at every depth. `statements` walks a whole document, or a collection body,
//! and carves it into `TAG ( ... )` and `TAG EMPTY` clauses without
//! interpreting their contents.

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;

use crate::scene::Span;

const EMPTY_KEYWORD: &str = "EMPTY";

/// One segmented clause: type word, body text, and source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStatement<'a> {
    /// The type word as written, qualifier stripped, case preserved.
    pub tag: &'a str,
    /// Text strictly between the outer parentheses, `None` for `EMPTY`.
    pub body: Option<&'a str>,
    /// Byte range of the whole clause, relative to the scanned text.
    pub span: Span,
}

/// Find the closing parenthesis matching the `(` at byte offset `open`.
///
/// Tracks nesting depth and returns the offset of the `)` that brings depth
/// back to zero, or `None` when the text ends first (unbalanced input) or
/// `open` does not sit on a `(`. All state is local to the call, so nested
/// and overlapping scans never interfere.
#[must_use]
pub fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    for (offset, byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Carve `text` into top-level WKT clauses.
///
/// A clause is an ASCII-alphabetic type word, an optional `Z`/`M`/`ZM`
/// qualifier, and then either a parenthesized body or the `EMPTY` keyword,
/// all case-insensitive. After a clause is emitted the scan resumes strictly
/// past its end, so tags nested inside a collection body are never re-matched
/// at this level; they are only reached through the dispatcher's own
/// recursive scan of the body.
///
/// Words with no accepted continuation are abandoned and the scan resumes at
/// the next word. A clause whose opening parenthesis never closes is skipped
/// entirely; scanning continues inside it so later complete clauses still
/// surface.
#[must_use]
pub fn statements(text: &str) -> Vec<RawStatement<'_>> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !bytes[pos].is_ascii_alphabetic() {
            pos += 1;
            continue;
        }

        let tag_start = pos;
        let tag_end = word_end(bytes, tag_start);
        let tag = &text[tag_start..tag_end];

        let mut cursor = skip_whitespace(bytes, tag_end);
        if let Some(qualifier_end) = qualifier_end(text, cursor) {
            cursor = skip_whitespace(bytes, qualifier_end);
        }

        if bytes.get(cursor) == Some(&b'(') {
            match matching_paren(text, cursor) {
                Some(close) => {
                    out.push(RawStatement {
                        tag,
                        body: Some(&text[cursor + 1..close]),
                        span: Span { start: tag_start, end: close + 1 },
                    });
                    pos = close + 1;
                }
                // Unbalanced clause: drop it, rescan from inside the body.
                None => pos = cursor + 1,
            }
            continue;
        }

        if is_empty_keyword(text, cursor) {
            let end = cursor + EMPTY_KEYWORD.len();
            out.push(RawStatement { tag, body: None, span: Span { start: tag_start, end } });
            pos = end;
            continue;
        }

        // Not a clause head; resume at the next word.
        pos = tag_end;
    }

    out
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn word_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    pos
}

/// Offset just past a `Z`/`M`/`ZM` qualifier word at `pos`, if one is there.
fn qualifier_end(text: &str, pos: usize) -> Option<usize> {
    let end = word_end(text.as_bytes(), pos);
    let word = &text[pos..end];
    let is_qualifier = word.eq_ignore_ascii_case("Z")
        || word.eq_ignore_ascii_case("M")
        || word.eq_ignore_ascii_case("ZM");
    is_qualifier.then_some(end)
}

/// Whether the word at `pos` is exactly the `EMPTY` keyword.
fn is_empty_keyword(text: &str, pos: usize) -> bool {
    let end = word_end(text.as_bytes(), pos);
    end == pos + EMPTY_KEYWORD.len() && text[pos..end].eq_ignore_ascii_case(EMPTY_KEYWORD)
}
