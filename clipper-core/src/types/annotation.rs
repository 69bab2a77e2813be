//! Annotation records extracted from a clippings export

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of entry the e-reader recorded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Highlight,
    Note,
    Bookmark,
}

impl AnnotationKind {
    /// Normalize the word following `- Your` on a metadata line.
    ///
    /// Anything that is not a highlight or a note is treated as a bookmark.
    pub fn from_marker(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "highlight" => Self::Highlight,
            "note" => Self::Note,
            _ => Self::Bookmark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Highlight => "highlight",
            Self::Note => "note",
            Self::Bookmark => "bookmark",
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything known about an annotation apart from its text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotationMetadata {
    /// Book title, without a leading byte-order mark
    pub book_title: String,

    /// Author as written inside the trailing parentheses
    pub author: String,

    pub kind: AnnotationKind,

    /// Page label, digits as found in the export
    pub page: Option<String>,

    /// Human-readable location, e.g. "Location 123-125"
    pub location: Option<String>,

    /// First number of the location range, only used for ordering
    pub location_number: Option<u64>,

    /// Raw text after "Added on"
    pub date: Option<String>,
}

impl AnnotationMetadata {
    /// Create metadata with required fields
    pub fn new(
        book_title: impl Into<String>,
        author: impl Into<String>,
        kind: AnnotationKind,
    ) -> Self {
        Self {
            book_title: book_title.into(),
            author: author.into(),
            kind,
            page: None,
            location: None,
            location_number: None,
            date: None,
        }
    }

    /// Set the page label
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set the location label and its sort key
    pub fn with_location(mut self, label: impl Into<String>, number: u64) -> Self {
        self.location = Some(label.into());
        self.location_number = Some(number);
        self
    }

    /// Set the raw date label
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// One highlight or note together with its metadata.
///
/// `content` is trimmed and never empty; the parser drops empty blocks instead
/// of constructing an annotation for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Annotation {
    pub metadata: AnnotationMetadata,
    pub content: String,
}

impl Annotation {
    pub fn new(metadata: AnnotationMetadata, content: impl Into<String>) -> Self {
        Self {
            metadata,
            content: content.into(),
        }
    }

    /// Get the book title
    pub fn title(&self) -> &str {
        &self.metadata.book_title
    }

    /// Get the author
    pub fn author(&self) -> &str {
        &self.metadata.author
    }

    pub fn kind(&self) -> AnnotationKind {
        self.metadata.kind
    }

    /// Location number used for ordering, missing locations sort as 0
    pub fn sort_location(&self) -> u64 {
        self.metadata.location_number.unwrap_or(0)
    }
}
