//! Info command implementation

use anyhow::{Context, Result};
use clipper_core::{convert_file, group_by_book, RenderOptions};
use serde::Serialize;

/// Per-book summary
#[derive(Serialize)]
struct BookInfo {
    title: String,
    author: String,
    highlights: usize,
    notes: usize,
}

/// Export summary output
#[derive(Serialize)]
struct ExportInfo {
    books: Vec<BookInfo>,
    annotations: usize,
    errors: usize,
}

/// Display the books and annotation counts in an export
pub fn info(input: &str, json: bool) -> Result<()> {
    let conversion = convert_file(input, &RenderOptions::default())
        .with_context(|| format!("Failed to read input file: {}", input))?;
    let outcome = conversion.outcome;

    let books = group_by_book(&outcome.annotations)
        .into_iter()
        .map(|(title, book)| BookInfo {
            highlights: book.highlight_count(),
            notes: book.note_count(),
            title,
            author: book.author,
        })
        .collect();

    let info = ExportInfo {
        books,
        annotations: outcome.annotations.len(),
        errors: outcome.errors.len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for book in &info.books {
            println!("{} ({})", book.title, book.author);
            println!("  Highlights: {}", book.highlights);
            println!("  Notes:      {}", book.notes);
        }
        println!("Books:       {}", info.books.len());
        println!("Annotations: {}", info.annotations);
        println!("Errors:      {}", info.errors);
    }

    Ok(())
}
