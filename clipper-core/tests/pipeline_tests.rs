//! End-to-end tests for the clippings pipeline
//!
//! These tests feed realistic exports through `parse` and `render` and check
//! the documented behaviour: block numbering, silent skips, substring
//! deduplication, ordering and the Markdown layout.

use clipper_core::{parse, render, AnnotationKind, RenderOptions};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

// =============================================================================
// Fixtures
// =============================================================================

/// A small export in the device's own layout, CRLF line endings and BOM included
const DEVICE_EXPORT: &str = "\u{feff}The Pragmatic Programmer (David Thomas;Andrew Hunt)\r\n\
- Your Highlight on page 21 | Location 310-312 | Added on Saturday, 6 January 2024 09:12:44\r\n\
\r\n\
Care about your craft.\r\n\
==========\r\n\
The Pragmatic Programmer (David Thomas;Andrew Hunt)\r\n\
- Your Bookmark on page 30 | Location 455 | Added on Saturday, 6 January 2024 09:20:01\r\n\
\r\n\
\r\n\
==========\r\n\
Dune (Frank Herbert)\r\n\
- Your Note on page 4 | Location 76 | Added on Sunday, 7 January 2024 21:03:10\r\n\
\r\n\
Remember the litany.\r\n\
==========\r\n\
Dune (Frank Herbert)\r\n\
- Your Highlight on page 4 | Location 75-76 | Added on Sunday, 7 January 2024 21:02:55\r\n\
\r\n\
I must not fear. Fear is the mind-killer.\r\n\
==========\r\n\
Dune (Frank Herbert)\r\n\
- Your Highlight on page 4 | Location 75 | Added on Sunday, 7 January 2024 21:02:40\r\n\
\r\n\
I must not fear.\r\n\
==========\r\n\
The Pragmatic Programmer (David Thomas;Andrew Hunt)\r\n\
- Your Highlight on page 12 | Location 190-191 | Added on Saturday, 6 January 2024 09:01:02\r\n\
\r\n\
Provide options, don't make lame excuses.\r\n\
==========\r\n";

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_device_export() {
    let outcome = parse(DEVICE_EXPORT);

    assert!(outcome.errors.is_empty());
    let summary: Vec<(&str, Option<u64>, &str)> = outcome
        .annotations
        .iter()
        .map(|a| {
            (
                a.metadata.book_title.as_str(),
                a.metadata.location_number,
                a.content.as_str(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Dune", Some(75), "I must not fear. Fear is the mind-killer."),
            ("Dune", Some(76), "Remember the litany."),
            (
                "The Pragmatic Programmer",
                Some(190),
                "Provide options, don't make lame excuses."
            ),
            ("The Pragmatic Programmer", Some(310), "Care about your craft."),
        ]
    );
    assert_eq!(outcome.annotations[1].metadata.kind, AnnotationKind::Note);
    assert_eq!(
        outcome.annotations[3].metadata.date.as_deref(),
        Some("Saturday, 6 January 2024 09:12:44")
    );
}

#[test]
fn test_substring_duplicate_example() {
    let raw = "Book A (Author X)\n- Your Highlight on page 5 | Location 100-102 | Added on Monday\n\nHello world\n==========\nBook A (Author X)\n- Your Highlight on Location 50\n\nHello\n==========\n";
    let outcome = parse(raw);

    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.annotations.len(), 1);
    assert_eq!(outcome.annotations[0].content, "Hello world");
    assert_eq!(outcome.annotations[0].metadata.location_number, Some(100));
}

#[test]
fn test_empty_input() {
    let outcome = parse("");
    assert!(outcome.annotations.is_empty());
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_only_delimiters_and_whitespace() {
    let outcome = parse("\n==========\n   \n==========\n\n");
    assert!(outcome.annotations.is_empty());
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_title_without_author_is_skipped_silently() {
    let outcome = parse("Just A Title\n- Your Highlight\n\ncontent");
    assert!(outcome.annotations.is_empty());
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_identical_contents_are_kept() {
    let raw = "Book (Author)\n- Your Highlight on Location 1\n\nSame\n==========\nBook (Author)\n- Your Note on Location 2\n\nSame\n";
    let outcome = parse(raw);

    assert_eq!(outcome.annotations.len(), 2);
    assert_eq!(outcome.annotations[0].metadata.kind, AnnotationKind::Highlight);
    assert_eq!(outcome.annotations[1].metadata.kind, AnnotationKind::Note);
}

#[test]
fn test_error_numbering_counts_empty_blocks() {
    let raw = "==========\n\n==========\nBook (Author)\n- Your Highlight on Location 123456789012345678901234567890\n\ntext\n";
    let outcome = parse(raw);

    assert!(outcome.annotations.is_empty());
    assert_eq!(outcome.errors.len(), 1);
    assert!(
        outcome.errors[0].starts_with("Failed to parse clipping block 3: "),
        "unexpected message: {}",
        outcome.errors[0]
    );
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_two_books_have_one_separator() {
    let outcome = parse(DEVICE_EXPORT);
    let markdown = render(&outcome.annotations, &RenderOptions::default());

    assert_eq!(markdown.matches("\n---\n").count(), 1);
    assert!(!markdown.trim_end().ends_with("---"));
    assert!(markdown.starts_with("# Dune\n\n## Frank Herbert\n\n"));
}

#[test]
fn test_rendered_markdown_structure() {
    let outcome = parse(DEVICE_EXPORT);
    let markdown = render(&outcome.annotations, &RenderOptions::default());

    let mut headings = Vec::new();
    let mut block_quotes = 0;
    let mut rules = 0;
    for event in Parser::new(&markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => headings.push(level),
            Event::Start(Tag::BlockQuote) => block_quotes += 1,
            Event::Rule => rules += 1,
            _ => {}
        }
    }

    assert_eq!(
        headings,
        vec![
            HeadingLevel::H1,
            HeadingLevel::H2,
            HeadingLevel::H1,
            HeadingLevel::H2
        ]
    );
    // Three highlights are quoted, the note is not
    assert_eq!(block_quotes, 3);
    assert_eq!(rules, 1);
}

#[test]
fn test_flat_render_has_no_headers() {
    let outcome = parse(DEVICE_EXPORT);
    let markdown = render(&outcome.annotations, &RenderOptions::flat());

    assert!(!markdown.contains("# "));
    assert!(!markdown.contains("---"));
    assert_eq!(
        markdown.lines().next(),
        Some("Page 4, Location 75-76, Sunday, 7 January 2024 21:02:55:")
    );
}

#[test]
fn test_note_metadata_line() {
    let outcome = parse(
        "Dune (Frank Herbert)\n- Your Note on page 4 | Location 76 | Added on Sunday\n\nRemember.",
    );
    let markdown = render(&outcome.annotations, &RenderOptions::flat());
    assert_eq!(markdown, "Note, Page 4, Location 76, Sunday:\n\nRemember.");
}
