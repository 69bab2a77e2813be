//! Batch conversion command implementation

use anyhow::{bail, Context, Result};
use clipper_core::{convert_file, RenderOptions};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Batch convert every `.txt` export in a directory
pub fn batch(input_dir: &str, output_dir: &str, flat: bool, jobs: usize) -> Result<()> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_path)?;

    let files: Vec<_> = fs::read_dir(input_path)
        .with_context(|| format!("Failed to read input directory: {}", input_dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("txt"))
                .unwrap_or(false)
        })
        .collect();

    if files.is_empty() {
        println!("No clippings files found in {}", input_dir);
        return Ok(());
    }

    println!("Found {} files to convert", files.len());

    let options = RenderOptions::default().with_group_by_book(!flat);

    // Set up progress tracking
    let multi_progress = MultiProgress::new();
    let overall_pb = multi_progress.add(ProgressBar::new(files.len() as u64));
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
            .context("Invalid progress template")?
            .progress_chars("##-"),
    );

    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build thread pool")?;

    pool.install(|| {
        files.par_iter().for_each(|file_path| {
            match process_file(file_path, output_path, &options) {
                Ok(_) => {
                    success_count.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    error_count.fetch_add(1, Ordering::Relaxed);
                    tracing::error!("Failed to convert {:?}: {:#}", file_path, e);
                }
            }

            overall_pb.inc(1);
        });
    });

    overall_pb.finish();

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    println!("\nBatch conversion complete:");
    println!("  Success: {}", success);
    println!("  Errors:  {}", errors);

    if errors > 0 {
        bail!("Batch conversion completed with {} errors", errors);
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path, options: &RenderOptions) -> Result<()> {
    let conversion = convert_file(input_path, options)?;

    for error in &conversion.outcome.errors {
        tracing::warn!("{:?}: {}", input_path, error);
    }

    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Could not determine output filename from input")?;
    let output_file = output_dir.join(format!("{}.md", stem));

    fs::write(&output_file, conversion.markdown)?;

    tracing::info!(
        "Converted {:?} -> {:?} ({} annotations)",
        input_path,
        output_file,
        conversion.outcome.annotations.len()
    );

    Ok(())
}
