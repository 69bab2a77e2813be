//! Core types for parsed clippings

mod annotation;
mod book;
mod options;

pub use annotation::{Annotation, AnnotationKind, AnnotationMetadata};
pub use book::{group_by_book, BookAnnotations};
pub use options::{RenderOptions, WriteOptions};
