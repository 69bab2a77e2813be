//! Markdown rendering of annotations
//!
//! Output structure for the grouped layout:
//!
//! ```text
//! # Title
//!
//! ## Author
//!
//! Page 5, Location 100-102, Monday:
//!
//! > Highlighted text
//!
//! ---
//!
//! # Next Title
//! ...
//! ```

use crate::types::{group_by_book, Annotation, AnnotationKind, RenderOptions};

/// Separator placed between per-book sections
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

const ENTRY_SEPARATOR: &str = "\n\n";

/// Render annotations into one Markdown document.
///
/// With `group_by_book`, annotations are partitioned by title in the order
/// titles first appear, each section headed by title and author. Without it,
/// entries are rendered in input order with no headers.
pub fn render(annotations: &[Annotation], options: &RenderOptions) -> String {
    if !options.group_by_book {
        return render_entries(annotations);
    }

    group_by_book(annotations)
        .iter()
        .map(|(title, book)| render_book(title, &book.author, &book.annotations))
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// Render a standalone document for a single book
pub fn render_book(title: &str, author: &str, annotations: &[Annotation]) -> String {
    format!(
        "{}{}{}",
        render_header(title, author),
        ENTRY_SEPARATOR,
        render_entries(annotations)
    )
}

fn render_header(title: &str, author: &str) -> String {
    format!("# {}\n\n## {}", title, author)
}

fn render_entries(annotations: &[Annotation]) -> String {
    annotations
        .iter()
        .map(render_annotation)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Render one annotation: metadata line, blank line, content
pub fn render_annotation(annotation: &Annotation) -> String {
    let metadata_line = metadata_line(annotation);

    match annotation.kind() {
        AnnotationKind::Highlight => format!("{}\n\n> {}", metadata_line, annotation.content),
        _ => format!("{}\n\n{}", metadata_line, annotation.content),
    }
}

/// `Note, Page <page>, <location>, <date>:` with absent parts left out
pub fn metadata_line(annotation: &Annotation) -> String {
    let metadata = &annotation.metadata;
    let mut parts: Vec<String> = Vec::new();

    if metadata.kind == AnnotationKind::Note {
        parts.push("Note".to_string());
    }
    if let Some(page) = &metadata.page {
        parts.push(format!("Page {}", page));
    }
    if let Some(location) = &metadata.location {
        parts.push(location.clone());
    }
    if let Some(date) = &metadata.date {
        parts.push(date.clone());
    }

    format!("{}:", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnnotationMetadata;

    fn highlight(title: &str, content: &str) -> Annotation {
        Annotation::new(
            AnnotationMetadata::new(title, "Author", AnnotationKind::Highlight)
                .with_page("5")
                .with_location("Location 100-102", 100)
                .with_date("Monday"),
            content,
        )
    }

    #[test]
    fn test_metadata_line_all_fields() {
        assert_eq!(
            metadata_line(&highlight("Book", "text")),
            "Page 5, Location 100-102, Monday:"
        );
    }

    #[test]
    fn test_metadata_line_note_without_fields() {
        let note = Annotation::new(
            AnnotationMetadata::new("Book", "Author", AnnotationKind::Note),
            "thought",
        );
        assert_eq!(metadata_line(&note), "Note:");
    }

    #[test]
    fn test_metadata_line_empty() {
        let annotation = Annotation::new(
            AnnotationMetadata::new("Book", "Author", AnnotationKind::Highlight),
            "text",
        );
        assert_eq!(metadata_line(&annotation), ":");
    }

    #[test]
    fn test_highlight_is_quoted() {
        assert_eq!(
            render_annotation(&highlight("Book", "Hello")),
            "Page 5, Location 100-102, Monday:\n\n> Hello"
        );
    }

    #[test]
    fn test_note_is_plain() {
        let note = Annotation::new(
            AnnotationMetadata::new("Book", "Author", AnnotationKind::Note)
                .with_location("Location 7", 7),
            "My thought",
        );
        assert_eq!(render_annotation(&note), "Note, Location 7:\n\nMy thought");
    }

    #[test]
    fn test_flat_render() {
        let annotations = vec![highlight("B", "one"), highlight("A", "two")];
        let output = render(&annotations, &RenderOptions::flat());
        assert_eq!(
            output,
            "Page 5, Location 100-102, Monday:\n\n> one\n\nPage 5, Location 100-102, Monday:\n\n> two"
        );
    }

    #[test]
    fn test_grouped_render_single_separator() {
        let annotations = vec![
            highlight("Book A", "one"),
            highlight("Book B", "two"),
            highlight("Book A", "three"),
        ];
        let output = render(&annotations, &RenderOptions::default());

        assert_eq!(output.matches("\n---\n").count(), 1);
        assert!(output.starts_with("# Book A\n\n## Author\n\n"));
        assert!(!output.ends_with("---"));
        let a = output.find("# Book A").unwrap();
        let b = output.find("# Book B").unwrap();
        assert!(a < b);
        assert!(output.find("> three").unwrap() < b);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], &RenderOptions::default()), "");
        assert_eq!(render(&[], &RenderOptions::flat()), "");
    }

    #[test]
    fn test_render_book() {
        let output = render_book("Book", "Author", &[highlight("Book", "one")]);
        assert_eq!(
            output,
            "# Book\n\n## Author\n\nPage 5, Location 100-102, Monday:\n\n> one"
        );
    }
}
