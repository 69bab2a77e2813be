//! Import command implementation

use anyhow::{bail, Context, Result};
use clipper_core::storage::{LocalStorage, StorageProvider};
use clipper_core::{import_clippings, ImportReport};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Import a clippings export as one Markdown file per book
pub async fn import(input: &str, output_dir: Option<&str>) -> Result<()> {
    let input_path = Path::new(input);

    let file_name = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Could not determine input file name")?;

    let source_dir = input_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    // Set up progress bar with animation
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Reading clippings...");
    let source = LocalStorage::new(source_dir);
    let raw = clipper_core::storage::read_text(&source, file_name)
        .await
        .with_context(|| format!("Failed to open input file: {}", input))?;

    pb.set_message("Writing book files...");
    let target: Box<dyn StorageProvider> = match output_dir {
        Some(dir) => Box::new(LocalStorage::new(dir)),
        None => Box::new(source),
    };
    let report = import_clippings(target.as_ref(), "", &raw).await;

    pb.finish_with_message(report.summary());
    print_report(&report);

    if !report.failures.is_empty() {
        bail!("{} book files could not be written", report.failures.len());
    }

    Ok(())
}

fn print_report(report: &ImportReport) {
    for path in &report.created {
        println!("  {}", path);
    }
    for failure in &report.failures {
        eprintln!("{}", failure);
    }
    for error in &report.parse_errors {
        tracing::warn!("{}", error);
    }
    println!("{}", report.summary());
}
