//! Parsing of e-reader clippings exports
//!
//! An export is a flat list of blocks separated by a line of ten equals signs.
//! [`parse`] splits the export, parses every block, drops substring duplicates
//! and returns the surviving annotations in reading order.

mod block;
mod fields;

pub use block::parse_block;
pub use fields::{extract_date, extract_location, extract_page, LocationRef};

use crate::dedupe::remove_duplicates;
use crate::sort::sort_by_location;
use crate::types::Annotation;
use serde::{Deserialize, Serialize};

/// Separator line between two clippings
pub const CLIPPING_DELIMITER: &str = "==========";

/// Result of parsing a whole export
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Deduplicated annotations, sorted by title then location
    pub annotations: Vec<Annotation>,

    /// One message per block that failed unexpectedly
    pub errors: Vec<String>,
}

impl ParseOutcome {
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Split raw export text into trimmed, non-empty blocks.
///
/// Each block is paired with its 1-based position in the delimiter-split
/// sequence. Empty segments are dropped but still consume an index, so the
/// numbers always match the position in the original file.
pub fn split_blocks(raw: &str) -> Vec<(usize, &str)> {
    let mut blocks = Vec::new();
    let mut index = 1;
    let mut start = 0;
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        let end = offset + line.len();
        if line.trim_end() == CLIPPING_DELIMITER {
            push_block(&mut blocks, index, &raw[start..offset]);
            index += 1;
            start = end;
        }
        offset = end;
    }
    push_block(&mut blocks, index, &raw[start..]);

    blocks
}

fn push_block<'a>(blocks: &mut Vec<(usize, &'a str)>, index: usize, segment: &'a str) {
    let block = segment.trim();
    if !block.is_empty() {
        blocks.push((index, block));
    }
}

/// Parse an export into deduplicated, ordered annotations.
///
/// Never fails: blocks that are not annotations are skipped, and blocks that
/// fail unexpectedly are reported in [`ParseOutcome::errors`].
pub fn parse(raw: &str) -> ParseOutcome {
    let mut annotations = Vec::new();
    let mut errors = Vec::new();

    for (index, block) in split_blocks(raw) {
        match parse_block(block) {
            Ok(Some(annotation)) => annotations.push(annotation),
            Ok(None) => tracing::trace!(block = index, "Skipping block without annotation"),
            Err(e) => {
                tracing::warn!(block = index, "Failed to parse clipping block: {}", e);
                errors.push(format!("Failed to parse clipping block {}: {}", index, e));
            }
        }
    }

    let parsed = annotations.len();
    let deduplicated = remove_duplicates(annotations);
    tracing::debug!(
        "Parsed {} annotations, {} left after removing duplicates",
        parsed,
        deduplicated.len()
    );

    ParseOutcome {
        annotations: sort_by_location(&deduplicated),
        errors,
    }
}
