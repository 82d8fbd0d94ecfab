//! refdoc — normalize scraped API reference records.
//!
//! Takes the crawler's JSON array of raw function pages and writes one
//! processed record per function: canonical signature, summary, example and
//! typed parameters. Supports two modes:
//!
//! - **stdin mode**: `refdoc < dply_docs.json > out.json`
//! - **file mode**: `refdoc dply_docs.json` → `preprocessed_dply_docs.json`

mod artifact;
mod model;
mod normalize;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "refdoc",
    about = "Normalize scraped API reference records into typed function signatures"
)]
struct Cli {
    /// Raw record files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (default: next to each input file)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), jsonl
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Log debug details to stderr
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("REFDOC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// stdin mode: read raw records from stdin, write the rendered batch to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let raw = artifact::parse_records(&input).context("failed to parse stdin")?;
    let records = normalize::normalize(&raw);
    tracing::info!(read = raw.len(), written = records.len(), "normalized stdin");

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&records)?);
    Ok(())
}

/// file mode: normalize each input file into its own preprocessed artifact.
fn file_mode(cli: &Cli) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;

    if let Some(dir) = cli.output.as_deref() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    for path in expand_globs(&cli.files)? {
        let raw = match artifact::read_records(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        let records = normalize::normalize(&raw);
        let out_path = artifact::output_path(&path, cli.output.as_deref(), renderer.file_extension());
        artifact::write_output(&out_path, &renderer.render(&records)?)?;

        tracing::info!(
            input = %path.display(),
            output = %out_path.display(),
            read = raw.len(),
            written = records.len(),
            dropped = raw.len() - records.len(),
            "normalized file"
        );
    }

    Ok(())
}

/// File extensions recognized as raw scrape artifacts when scanning directories.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for raw artifacts.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_raw_artifact(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_raw_artifact(path: &Path) -> bool {
    let supported = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
    supported && !artifact::is_output(path)
}
