//! Clipper CLI - Command-line interface for e-reader clippings

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "clipper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a clippings export into a single Markdown document
    Convert {
        /// Input file path
        input: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Do not group annotations under per-book headers
        #[arg(long)]
        flat: bool,
    },

    /// Import a clippings export as one Markdown file per book
    Import {
        /// Input file path
        input: String,

        /// Directory to write the book files to (defaults to the input's directory)
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Display the books and annotation counts in an export
    Info {
        /// Input file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a clippings export
    Validate {
        /// Input file path
        input: String,

        /// Fail if any block could not be parsed
        #[arg(long)]
        strict: bool,
    },

    /// Batch convert every export in a directory
    Batch {
        /// Input directory
        input_dir: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Do not group annotations under per-book headers
        #[arg(long)]
        flat: bool,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "clipper_cli=debug,clipper_core=debug"
    } else {
        "clipper_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            flat,
        } => commands::convert(&input, output.as_deref(), flat),

        Commands::Import { input, output_dir } => {
            commands::import(&input, output_dir.as_deref()).await
        }

        Commands::Info { input, json } => commands::info(&input, json),

        Commands::Validate { input, strict } => commands::validate(&input, strict),

        Commands::Batch {
            input_dir,
            output_dir,
            flat,
            jobs,
        } => commands::batch(&input_dir, &output_dir, flat, jobs),
    }
}
