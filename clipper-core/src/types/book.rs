//! Grouping of annotations by the book they belong to

use super::{Annotation, AnnotationKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All annotations of one book, in the order they were grouped
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookAnnotations {
    /// Author of the first annotation seen for this title
    pub author: String,

    pub annotations: Vec<Annotation>,
}

impl BookAnnotations {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            annotations: Vec::new(),
        }
    }

    pub fn highlight_count(&self) -> usize {
        self.count_kind(AnnotationKind::Highlight)
    }

    pub fn note_count(&self) -> usize {
        self.count_kind(AnnotationKind::Note)
    }

    fn count_kind(&self, kind: AnnotationKind) -> usize {
        self.annotations.iter().filter(|a| a.kind() == kind).count()
    }
}

/// Group annotations by exact book title.
///
/// Titles keep the order in which they first appear, and annotations keep
/// their input order within a title.
pub fn group_by_book<'a, I>(annotations: I) -> IndexMap<String, BookAnnotations>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    let mut books: IndexMap<String, BookAnnotations> = IndexMap::new();
    for annotation in annotations {
        books
            .entry(annotation.title().to_string())
            .or_insert_with(|| BookAnnotations::new(annotation.author()))
            .annotations
            .push(annotation.clone());
    }
    books
}
