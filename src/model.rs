//! Data model for scraped and normalized reference records.

use serde::{Deserialize, Serialize};

/// One scraped function page, as emitted by the crawler.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawRecord {
    /// Page slug, e.g. "mutate" from ".../reference/mutate.html"
    #[serde(default)]
    pub item_id: Option<String>,
    /// Usage block, newlines collapsed to spaces
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Argument table rows, each "name: text"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parameters: Vec<String>,
}

/// Normalized record written to the output artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedRecord {
    pub id: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub summary: String,
    #[serde(rename = "code-info")]
    pub code_info: CodeInfo,
}

/// Function name plus its parameters in signature order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeInfo {
    pub id: String,
    pub parameters: Vec<ParamDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// `None` until type inference runs
    #[serde(rename = "type")]
    pub ty: Option<ParamType>,
    pub description: String,
}

/// Inferred parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Int,
    Float,
    Bool,
    Tensor,
    String,
    Dataframe,
    Others,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
