//! Function signature parsing.
//!
//! Works on the usage text of a reference page, e.g.
//! `mutate(.data, ..., .keep = c("all", "used"))`. Extraction is purely
//! positional: no attempt is made to understand the documented language.

use crate::model::{CodeInfo, ParamDescriptor};

/// Build the canonical code snippet `{id}({body})` from a raw usage block.
///
/// Keeps the text from the first `(` up to and including the first `)` after
/// it. Nested parentheses are not tracked, so a default that is itself a call
/// truncates the signature there. Without a `(` the result is just `id`; an
/// unclosed `(` keeps everything after it.
pub fn canonical_code(id: &str, raw_code: &str) -> String {
    let Some(open) = raw_code.find('(') else {
        return id.to_string();
    };
    let rest = &raw_code[open..];
    let slice = match rest.find(')') {
        Some(close) => &rest[..=close],
        None => rest,
    };
    format!("{}{}", id, slice)
}

/// Parse a canonical code snippet into its parameter descriptors.
///
/// The body is the text strictly between the first `(` and the last `)`.
/// Types are left unset for the normalizer to infer.
pub fn parse_signature(code: &str, id: &str) -> CodeInfo {
    let parameters = signature_body(code)
        .map(|body| {
            split_top_level(body)
                .into_iter()
                .filter_map(parse_segment)
                .collect()
        })
        .unwrap_or_default();

    CodeInfo {
        id: id.to_string(),
        parameters,
    }
}

fn signature_body(code: &str) -> Option<&str> {
    let open = code.find('(')?;
    let inner = &code[open + 1..];
    match inner.rfind(')') {
        Some(close) => Some(&inner[..close]),
        None => Some(inner),
    }
}

/// Split on commas that are not nested in brackets or quotes.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&body[start..]);
    segments
}

fn parse_segment(segment: &str) -> Option<ParamDescriptor> {
    let segment = segment.trim();
    if segment.is_empty() {
        return None;
    }
    let (name, default) = match segment.split_once('=') {
        Some((name, default)) => (name.trim(), Some(default.trim().to_string())),
        None => (segment, None),
    };
    Some(ParamDescriptor {
        name: name.to_string(),
        default,
        ty: None,
        description: String::new(),
    })
}
