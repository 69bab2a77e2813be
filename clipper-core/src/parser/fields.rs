//! Field extractors for the segments of a metadata line
//!
//! A metadata line such as
//! `- Your Highlight on page 5 | Location 100-102 | Added on Monday, 1 January 2024`
//! is split on `|`, and every segment is offered to each extractor in turn.
//! Each extractor only knows about its own field.

use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)page (\d+)").unwrap());

static LOCATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Location (\d+)(?:-\d+)?").unwrap());

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Added on (.+)$").unwrap());

/// A location reference found in a segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRef {
    /// The matched phrase, e.g. "Location 100-102"
    pub label: String,

    /// First number of the range
    pub number: u64,
}

/// Page digits from `page <digits>`
pub fn extract_page(segment: &str) -> Option<String> {
    PAGE_REGEX
        .captures(segment)
        .map(|caps| caps[1].to_string())
}

/// Location label and sort key from `Location <n>` or `Location <n>-<m>`.
///
/// Fails only when the first number does not fit in a `u64`. The caller
/// reports such a block as a parse error, so its content is dropped from the
/// output along with the location.
pub fn extract_location(segment: &str) -> Result<Option<LocationRef>, ParseError> {
    let Some(caps) = LOCATION_REGEX.captures(segment) else {
        return Ok(None);
    };

    let digits = &caps[1];
    let number = digits
        .parse::<u64>()
        .map_err(|e| ParseError::InvalidLocation(format!("{} ({})", digits, e)))?;

    Ok(Some(LocationRef {
        label: caps[0].to_string(),
        number,
    }))
}

/// Raw date text following `Added on`
pub fn extract_date(segment: &str) -> Option<String> {
    DATE_REGEX
        .captures(segment)
        .map(|caps| caps[1].to_string())
}
