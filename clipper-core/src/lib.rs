//! Clipper Core Library
//!
//! This crate turns the plain-text clippings export of an e-reader into
//! structured annotations and renders them as Markdown, one section (or one
//! document) per book.
//!
//! The pipeline is: split the export into blocks, parse each block, drop
//! substring duplicates, sort by title and location, render.

pub mod convert;
pub mod dedupe;
pub mod error;
pub mod import;
pub mod parser;
pub mod render;
pub mod sort;
pub mod storage;
pub mod types;

pub use convert::{convert, convert_file, read_export, Conversion};
pub use dedupe::remove_duplicates;
pub use error::{ClipperError, ParseError, Result, StorageError};
pub use import::{import_clippings, import_file, ImportReport};
pub use parser::{parse, parse_block, split_blocks, ParseOutcome, CLIPPING_DELIMITER};
pub use render::{render, render_annotation, render_book};
pub use sort::sort_by_location;
pub use types::{
    group_by_book, Annotation, AnnotationKind, AnnotationMetadata, BookAnnotations,
    RenderOptions, WriteOptions,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_render() {
        let outcome = parse("Dune (Frank Herbert)\n- Your Highlight on Location 12\n\nSpice");
        let markdown = render(&outcome.annotations, &RenderOptions::default());
        assert_eq!(markdown, "# Dune\n\n## Frank Herbert\n\nLocation 12:\n\n> Spice");
    }
}
