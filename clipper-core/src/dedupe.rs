//! Removal of annotations that are substrings of other annotations
//!
//! Re-highlighting a passage on the device leaves both the old, shorter
//! highlight and the new, longer one in the export. Within one book, an
//! annotation whose content is contained in a *different* content string is
//! dropped. Identical contents are not duplicates of each other and are all
//! kept.
//!
//! This is a plain substring test, so a short annotation such as a single word
//! is dropped whenever a longer annotation of the same book happens to contain
//! it, even if the two are unrelated.

use crate::types::{group_by_book, Annotation};

/// Drop every annotation whose content is a strict substring of another
/// annotation's content in the same book.
///
/// Books come out in the order their titles first appear; annotations keep
/// their relative order within a book.
pub fn remove_duplicates(annotations: Vec<Annotation>) -> Vec<Annotation> {
    let books = group_by_book(&annotations);
    let mut result = Vec::with_capacity(annotations.len());

    for (title, book) in books {
        let group = &book.annotations;
        let before = group.len();

        let kept: Vec<Annotation> = group
            .iter()
            .enumerate()
            .filter(|(index, annotation)| !is_contained_elsewhere(group, *index, annotation))
            .map(|(_, annotation)| annotation.clone())
            .collect();

        if kept.len() < before {
            tracing::debug!(
                "Removed {} duplicate annotations from '{}'",
                before - kept.len(),
                title
            );
        }
        result.extend(kept);
    }

    result
}

fn is_contained_elsewhere(group: &[Annotation], index: usize, annotation: &Annotation) -> bool {
    let content = annotation.content.as_str();
    group.iter().enumerate().any(|(other_index, other)| {
        other_index != index && other.content != content && other.content.contains(content)
    })
}
