//! JSON renderer — the whole batch as one pretty-printed array.

use crate::model::ProcessedRecord;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, records: &[ProcessedRecord]) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(records).context("failed to serialize records")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
