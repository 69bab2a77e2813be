//! Validate command implementation

use anyhow::{bail, Context, Result};
use clipper_core::{parse, read_export, split_blocks};

/// Validate a clippings export
pub fn validate(input: &str, strict: bool) -> Result<()> {
    let raw = read_export(input)
        .with_context(|| format!("Failed to open input file: {}", input))?;

    let blocks = split_blocks(&raw).len();
    let outcome = parse(&raw);

    println!("Blocks:      {}", blocks);
    println!("Annotations: {}", outcome.annotations.len());

    if !outcome.has_errors() {
        println!("Valid clippings file");
        return Ok(());
    }

    for error in &outcome.errors {
        eprintln!("{}", error);
    }

    if strict {
        bail!(
            "Validation failed for {}: {} blocks could not be parsed",
            input,
            outcome.errors.len()
        );
    }

    println!("Valid with {} parse errors", outcome.errors.len());
    Ok(())
}
