//! Parsing of a single clipping block
//!
//! A block looks like:
//!
//! ```text
//! The Title (The Author)
//! - Your Highlight on page 5 | Location 100-102 | Added on Monday, 1 January 2024
//!
//! The highlighted text.
//! ```

use super::fields::{extract_date, extract_location, extract_page};
use crate::error::ParseError;
use crate::types::{Annotation, AnnotationKind, AnnotationMetadata};
use once_cell::sync::Lazy;
use regex::Regex;

/// Title up to the last parenthesized group, author inside it
static TITLE_AUTHOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+) \(([^()]+)\)$").unwrap());

/// Authors that themselves contain parentheses, e.g. "Title (Smith (ed.))"
static NESTED_AUTHOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?) \((.+)\)$").unwrap());

static KIND_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^- Your (\w+)").unwrap());

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Fields read from the second line of a block
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineMetadata {
    kind: AnnotationKind,
    page: Option<String>,
    location: Option<(String, u64)>,
    date: Option<String>,
}

/// Parse one trimmed, non-empty block.
///
/// `Ok(None)` means the block is not an annotation (too short, unrecognized
/// header lines, bookmark, or no content) and should be skipped silently.
/// An error rejects the whole block: its content is not recovered.
pub fn parse_block(block: &str) -> Result<Option<Annotation>, ParseError> {
    let lines: Vec<String> = block
        .split('\n')
        .map(|line| line.replace('\r', ""))
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Ok(None);
    }

    let Some((title, author)) = parse_title_line(&lines[0]) else {
        return Ok(None);
    };

    let Some(line) = parse_metadata_line(&lines[1])? else {
        return Ok(None);
    };

    if line.kind == AnnotationKind::Bookmark {
        return Ok(None);
    }

    let content = lines[2..].join("\n");
    let content = content.trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut metadata = AnnotationMetadata::new(title, author, line.kind);
    metadata.page = line.page;
    if let Some((label, number)) = line.location {
        metadata = metadata.with_location(label, number);
    }
    metadata.date = line.date;

    Ok(Some(Annotation::new(metadata, content)))
}

/// Split `<title> (<author>)` into its parts
fn parse_title_line(line: &str) -> Option<(String, String)> {
    let caps = TITLE_AUTHOR_REGEX
        .captures(line)
        .or_else(|| NESTED_AUTHOR_REGEX.captures(line))?;

    let title = caps[1].trim_start_matches(BYTE_ORDER_MARK);
    Some((title.to_string(), caps[2].to_string()))
}

/// Read the kind marker and the `|`-separated fields of a metadata line.
///
/// When several segments carry the same field, the last one wins.
fn parse_metadata_line(line: &str) -> Result<Option<LineMetadata>, ParseError> {
    let Some(caps) = KIND_REGEX.captures(line) else {
        return Ok(None);
    };

    let mut metadata = LineMetadata {
        kind: AnnotationKind::from_marker(&caps[1]),
        page: None,
        location: None,
        date: None,
    };

    let rest = &line[caps.get(0).map_or(0, |m| m.end())..];
    for segment in rest.split('|').map(str::trim) {
        if let Some(page) = extract_page(segment) {
            metadata.page = Some(page);
        }
        if let Some(location) = extract_location(segment)? {
            metadata.location = Some((location.label, location.number));
        }
        if let Some(date) = extract_date(segment) {
            metadata.date = Some(date);
        }
    }

    Ok(Some(metadata))
}
