//! Convert command implementation

use anyhow::{Context, Result};
use clipper_core::{convert_file, RenderOptions};
use std::fs;

/// Convert a clippings export into one Markdown document
pub fn convert(input: &str, output: Option<&str>, flat: bool) -> Result<()> {
    let options = RenderOptions::default().with_group_by_book(!flat);

    let conversion = convert_file(input, &options)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    for error in &conversion.outcome.errors {
        tracing::warn!("{}", error);
    }

    tracing::info!(
        "Parsed {} annotations from {}",
        conversion.outcome.annotations.len(),
        input
    );

    match output {
        Some(path) => {
            fs::write(path, &conversion.markdown)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            println!(
                "Converted {} annotations -> {}",
                conversion.outcome.annotations.len(),
                path
            );
        }
        None => println!("{}", conversion.markdown),
    }

    Ok(())
}
