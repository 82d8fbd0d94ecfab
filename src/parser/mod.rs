//! Parsers for the semi-structured text fields of a scraped record.

pub mod signature;
pub mod span;
