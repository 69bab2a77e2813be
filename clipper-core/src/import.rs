//! Import of a clippings export into one Markdown document per book

use crate::error::Result;
use crate::parser::parse;
use crate::render::render_book;
use crate::storage::{
    join_path, read_text, sanitize_filename, unique_path, write_markdown, StorageProvider,
};
use crate::types::{group_by_book, WriteOptions};
use serde::Serialize;

/// What an import produced
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportReport {
    /// Paths of the documents that were written
    pub created: Vec<String>,

    /// Parse errors reported for individual blocks
    pub parse_errors: Vec<String>,

    /// Books whose document could not be written
    pub failures: Vec<String>,
}

impl ImportReport {
    pub fn files_created(&self) -> usize {
        self.created.len()
    }

    /// True when the export contained no annotations at all
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.failures.is_empty()
    }

    /// One-line message for the user
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "No clippings found in file".to_string()
        } else if !self.parse_errors.is_empty() {
            format!(
                "Created {} files with {} parsing errors",
                self.files_created(),
                self.parse_errors.len()
            )
        } else {
            format!("Successfully created {} book files", self.files_created())
        }
    }
}

/// Parse `raw` and write one document per book into `folder`.
///
/// Documents are named after the sanitized book title and never overwrite an
/// existing file; a numeric suffix is added instead. A failed write is
/// recorded and the remaining books are still imported.
pub async fn import_clippings(
    storage: &dyn StorageProvider,
    folder: &str,
    raw: &str,
) -> ImportReport {
    let outcome = parse(raw);
    let mut report = ImportReport {
        parse_errors: outcome.errors,
        ..ImportReport::default()
    };

    if outcome.annotations.is_empty() {
        tracing::info!("No clippings found");
        return report;
    }

    for (title, book) in group_by_book(&outcome.annotations) {
        let markdown = render_book(&title, &book.author, &book.annotations);
        let base = join_path(folder, &sanitize_filename(&title));

        let written = match unique_path(storage, &base).await {
            Ok(path) => write_markdown(storage, &path, &markdown, WriteOptions::default()).await,
            Err(e) => Err(e),
        };

        match written {
            Ok(path) => {
                tracing::info!(
                    "Wrote {} annotations for '{}' to {}",
                    book.annotations.len(),
                    title,
                    path
                );
                report.created.push(path);
            }
            Err(e) => {
                tracing::error!("Failed to create file for '{}': {}", title, e);
                report
                    .failures
                    .push(format!("Failed to create file for \"{}\": {}", title, e));
            }
        }
    }

    report
}

/// Read the export at `source` and import it into `folder` of the same storage
pub async fn import_file(
    storage: &dyn StorageProvider,
    source: &str,
    folder: &str,
) -> Result<ImportReport> {
    let raw = read_text(storage, source).await?;
    Ok(import_clippings(storage, folder, &raw).await)
}
