//! One-shot conversion of an export into a Markdown document

use crate::error::Result;
use crate::parser::{parse, ParseOutcome};
use crate::render::render;
use crate::types::RenderOptions;
use std::path::Path;

/// Parsed annotations together with their rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub outcome: ParseOutcome,
    pub markdown: String,
}

/// Parse and render an export held in memory
pub fn convert(raw: &str, options: &RenderOptions) -> Conversion {
    let outcome = parse(raw);
    let markdown = render(&outcome.annotations, options);
    Conversion { outcome, markdown }
}

/// Read an export file as text.
///
/// Invalid UTF-8 is replaced rather than rejected; exports copied off a
/// device occasionally carry stray bytes.
pub fn read_export(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    tracing::debug!("Read {} bytes from {:?}", data.len(), path);
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Parse and render an export file
pub fn convert_file(path: impl AsRef<Path>, options: &RenderOptions) -> Result<Conversion> {
    Ok(convert(&read_export(path)?, options))
}
