//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod jsonl;

use crate::model::ProcessedRecord;
use anyhow::{anyhow, Result};

/// Trait for rendering processed records into a specific output format.
pub trait Renderer {
    fn render(&self, records: &[ProcessedRecord]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "jsonl" | "ndjson" => Ok(Box::new(jsonl::JsonLinesRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or jsonl", format)),
    }
}
