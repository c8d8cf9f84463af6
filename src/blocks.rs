//! Splitting reading documents into numbered blocks and block internals.

use std::collections::BTreeMap;

/// One line reading split into its display parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// First line of the block, usually `N. Title`.
    pub title: String,
    /// First paragraph after the title.
    pub summary: String,
    /// Remaining paragraphs rejoined with blank lines.
    pub body: String,
}

/// A hexagram reading split into header and indented metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeader {
    /// First line of the block.
    pub header: String,
    /// Everything after the header, with leading indentation stripped
    /// from lines that open a parenthesized annotation.
    pub meta: String,
}

/// Convert CRLF and bare CR line endings to LF.
pub(crate) fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split a document into blocks keyed by their `N.` labels.
///
/// A block starts at a line whose first characters are digits followed by
/// a dot and at least one whitespace character (the line's own newline
/// counts). Each block runs to the next label or end of input and keeps
/// its label line. Text before the first label is dropped; when a label
/// number repeats, the last occurrence wins.
pub fn parse_numbered_blocks(text: &str) -> BTreeMap<u32, String> {
    let text = normalize_newlines(text);

    let mut starts: Vec<(u32, usize)> = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let has_newline = line.ends_with('\n');
        if let Some(label) = block_label(line, has_newline) {
            starts.push((label, offset));
        }
        offset += line.len();
    }

    let mut blocks = BTreeMap::new();
    for (i, &(label, start)) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(text.len(), |&(_, next)| next);
        blocks.insert(label, text[start..end].trim().to_string());
    }
    blocks
}

/// Label of a block-opening line, if the line opens one.
fn block_label(line: &str, has_newline: bool) -> Option<u32> {
    let body = line.strip_suffix('\n').unwrap_or(line);
    let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let rest = body[digits..].strip_prefix('.')?;
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => {}
        None if has_newline => {}
        _ => return None,
    }
    body[..digits].parse().ok()
}

/// Split a line-reading block into title, summary and body.
///
/// The title is the block's first line; the remainder is split on blank
/// lines into paragraphs, the first of which becomes the summary and the
/// rest the body. Missing parts come back empty.
pub fn split_line_record(block: &str) -> LineRecord {
    let block = normalize_newlines(block);
    let mut lines = block.split('\n');
    let title = lines.next().unwrap_or("").trim().to_string();
    let rest = lines.collect::<Vec<_>>().join("\n");
    let rest = rest.trim();

    let paragraphs: Vec<&str> = regex!(r"\n\s*\n")
        .split(rest)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    LineRecord {
        title,
        summary: paragraphs.first().map_or_else(String::new, |p| (*p).to_string()),
        body: paragraphs.get(1..).map_or_else(String::new, |rest| rest.join("\n\n")),
    }
}

/// Split a hexagram block into header line and metadata.
///
/// Metadata lines that begin a parenthesized annotation are frequently
/// indented in the source documents; that indentation is stripped so the
/// annotations align with the surrounding text.
pub fn split_group_header(block: &str) -> GroupHeader {
    let block = normalize_newlines(block);
    let mut lines = block.split('\n');
    let header = lines.next().unwrap_or("").trim().to_string();
    let rest = lines.collect::<Vec<_>>().join("\n");
    let meta = regex!(r"(^|\n)[ \t]+\(").replace_all(rest.trim(), "${1}(").into_owned();

    GroupHeader { header, meta }
}
