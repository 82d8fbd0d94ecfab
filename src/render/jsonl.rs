//! JSON Lines renderer — one compact record per line.

use crate::model::ProcessedRecord;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonLinesRenderer;

impl Renderer for JsonLinesRenderer {
    fn render(&self, records: &[ProcessedRecord]) -> Result<String> {
        let mut out = String::new();
        for record in records {
            let line = serde_json::to_string(record)
                .with_context(|| format!("failed to serialize record {}", record.id))?;
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "jsonl"
    }
}
