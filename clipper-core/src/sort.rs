//! Reading order for annotations

use crate::types::Annotation;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort annotations by book title, then by location number.
///
/// Missing location numbers sort as 0, so unlocated annotations come first
/// within their book. The sort is stable and returns a new vector.
pub fn sort_by_location(annotations: &[Annotation]) -> Vec<Annotation> {
    let mut sorted = annotations.to_vec();
    sorted.sort_by(compare_annotations);
    sorted
}

fn compare_annotations(a: &Annotation, b: &Annotation) -> Ordering {
    compare_titles(a.title(), b.title()).then_with(|| a.sort_location().cmp(&b.sort_location()))
}

/// Dictionary-style comparison of titles.
///
/// Letters compare on their base form first, ignoring accents and case, so
/// "Éclair" sorts with the e's. Ties are broken by accents (unaccented first),
/// then by case (lowercase first), then by bytes.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase_decomposed(a).cmp(lowercase_decomposed(b)))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| y.is_lowercase().cmp(&x.is_lowercase()))
                .unwrap_or_else(|| a.len().cmp(&b.len()))
        })
        .then_with(|| a.cmp(b))
}

fn lowercase_decomposed(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    lowercase_decomposed(s).filter(|c| !is_combining_mark(*c))
}
