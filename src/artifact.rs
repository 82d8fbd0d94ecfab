//! Reading raw scrape artifacts and writing preprocessed ones.

use crate::model::RawRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of every preprocessed output file name.
pub const OUTPUT_PREFIX: &str = "preprocessed_";

/// Parse a JSON array of raw records.
pub fn parse_records(content: &str) -> Result<Vec<RawRecord>> {
    serde_json::from_str(content).context("expected a JSON array of records")
}

/// Read and parse a raw scrape artifact.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_records(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Output path for `input`: `preprocessed_<file name>` in `out_dir`, or next
/// to the input. The extension is swapped only when it differs from `ext`.
pub fn output_path(input: &Path, out_dir: Option<&Path>, ext: &str) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    let mut path = dir.join(format!("{}{}", OUTPUT_PREFIX, file_name));
    if input.extension().and_then(|e| e.to_str()) != Some(ext) {
        path.set_extension(ext);
    }
    path
}

/// Write `contents` to `path`, removing any previous file there first.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove previous {}", path.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Whether `path` looks like one of our own outputs.
pub fn is_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(OUTPUT_PREFIX))
}
