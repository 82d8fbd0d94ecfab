//! Raw record → processed record pipeline.
//!
//! Each record is handled on its own:
//!
//! 1. **Filter** — records without an `item_id` are dropped
//! 2. **Canonicalize** — signature rewritten as `{id}(...)`
//! 3. **Summarize** — first sentence and optional `Example:` block
//! 4. **Parse** — parameters from the canonical signature
//! 5. **Enrich** — per-parameter description and inferred type

mod describe;
mod infer;

use crate::model::{ParamDescriptor, ProcessedRecord, RawRecord};
use crate::parser::signature::{canonical_code, parse_signature};
use crate::parser::span::{after_marker, before_marker};

const SUMMARY_END: &str = ". ";
const EXAMPLE_MARKER: &str = "Example:";
const ESCAPED_GT: &str = "&gt;";

/// Normalize a batch of raw records, dropping those without an identifier.
pub fn normalize(raw: &[RawRecord]) -> Vec<ProcessedRecord> {
    identified(raw)
        .map(|(id, record)| process_record(id, record))
        .collect()
}

/// Records carrying a non-empty `item_id`, paired with it.
pub fn identified(raw: &[RawRecord]) -> impl Iterator<Item = (&str, &RawRecord)> {
    raw.iter().enumerate().filter_map(|(index, record)| {
        match record.item_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => Some((id, record)),
            None => {
                tracing::warn!(index, "dropping record without item_id");
                None
            }
        }
    })
}

/// Build the processed form of a single identified record.
pub fn process_record(id: &str, raw: &RawRecord) -> ProcessedRecord {
    let description = raw.description.as_deref().unwrap_or_default();
    let code = canonical_code(id, raw.code.as_deref().unwrap_or_default());

    let mut code_info = parse_signature(&code, id);
    enrich_parameters(&mut code_info.parameters, description, &raw.parameters);

    ProcessedRecord {
        id: id.to_string(),
        code,
        example: extract_example(description),
        summary: before_marker(description, SUMMARY_END).to_string(),
        code_info,
    }
}

fn extract_example(description: &str) -> Option<String> {
    after_marker(description, EXAMPLE_MARKER).map(|example| example.replace(ESCAPED_GT, ""))
}

fn enrich_parameters(params: &mut [ParamDescriptor], description: &str, table: &[String]) {
    let names: Vec<String> = params.iter().map(|p| p.name.clone()).collect();

    for (i, param) in params.iter_mut().enumerate() {
        let next = names.get(i + 1).map(String::as_str);
        param.description = describe::describe(&param.name, next, description, table);
        if param.ty.is_none() {
            param.ty = Some(infer::infer_type(&param.name, &param.description, table));
        }
        tracing::debug!(name = %param.name, ty = ?param.ty, "enriched parameter");
    }
}
