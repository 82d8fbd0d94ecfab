//! Parameter type inference from free-text descriptions.

use crate::model::ParamType;
use regex::Regex;
use std::sync::LazyLock;

/// Keyword → type, checked in order; the first keyword contained in the
/// type hint wins.
const TYPE_KEYWORDS: &[(&str, ParamType)] = &[
    ("int", ParamType::Int),
    ("float", ParamType::Float),
    ("bool", ParamType::Bool),
    ("Tensor", ParamType::Tensor),
    ("string", ParamType::String),
];

const DATA_FRAME_PHRASE: &str = "A data frame";

// Text after the first "(" up to the next ")" or the end of the description.
static RE_TYPE_HINT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]*)").unwrap());

/// Infer the type of parameter `name` from its matched `description`,
/// falling back to the argument `table` for data frames.
pub fn infer_type(name: &str, description: &str, table: &[String]) -> ParamType {
    let ty = type_hint(description).map_or(ParamType::Others, classify);
    if ty == ParamType::Others && mentions_data_frame(name, table) {
        return ParamType::Dataframe;
    }
    ty
}

fn type_hint(description: &str) -> Option<&str> {
    RE_TYPE_HINT
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn classify(hint: &str) -> ParamType {
    TYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| hint.contains(*keyword))
        .map_or(ParamType::Others, |&(_, ty)| ty)
}

/// Only the first table row mentioning `name` is consulted.
fn mentions_data_frame(name: &str, table: &[String]) -> bool {
    table
        .iter()
        .find(|row| row.contains(name))
        .is_some_and(|row| row.contains(DATA_FRAME_PHRASE))
}
