//! Parameter description matching.
//!
//! Two independent sources are tried in order: a field list embedded in the
//! description block (`\nname (type) text`), then the argument table rows
//! (`name: text`).

use crate::parser::span::find_span;

/// Find the description of `name`, whose successor in the signature is `next`.
pub fn describe(name: &str, next: Option<&str>, description: &str, table: &[String]) -> String {
    from_field_list(name, next, description)
        .or_else(|| from_table(name, table))
        .unwrap_or_default()
}

/// Match `\n{name} (` up to `\n{next} (`, or up to a blank line for the last
/// parameter. The opening parenthesis is part of the start sentinel and is
/// restored in the result.
fn from_field_list(name: &str, next: Option<&str>, description: &str) -> Option<String> {
    let start = format!("\n{} (", name);
    let end = match next {
        Some(next) => format!("\n{} (", next),
        None => "\n\n".to_string(),
    };
    find_span(description, &start, &end).map(|span| format!("({}", span))
}

/// First argument table row whose name column equals `name`.
fn from_table(name: &str, table: &[String]) -> Option<String> {
    table.iter().find_map(|row| {
        let row = row.replace("python:", "");
        let (head, text) = row.split_once(':')?;
        (table_row_name(head) == name).then(|| text.trim_end_matches(')').to_string())
    })
}

/// Name column of a table row: cut at the first `(`, spaces removed.
fn table_row_name(head: &str) -> String {
    let head = head.split_once('(').map_or(head, |(name, _)| name);
    head.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn field_list_between_neighbours() {
        let desc = "Summary.\nx (int) first\ny (bool) second\n\nMore";
        assert_eq!(describe("x", Some("y"), desc, &[]), "(int) first");
        assert_eq!(describe("y", None, desc, &[]), "(bool) second");
    }

    #[test]
    fn field_list_wins_over_table() {
        let desc = "\nx (int) from list\n\n";
        let rows = table(&["x: from table"]);
        assert_eq!(describe("x", None, desc, &rows), "(int) from list");
    }

    #[test]
    fn table_fallback() {
        let rows = table(&[".data: A data frame, data frame extension (e.g. a tibble)"]);
        assert_eq!(
            describe(".data", None, "Select rows. Nothing structured.", &rows),
            " A data frame, data frame extension (e.g. a tibble"
        );
    }

    #[test]
    fn table_name_ignores_spaces_and_parenthetical() {
        let rows = table(&["n_max (optional): Maximum rows", "na rm: Drop missing"]);
        assert_eq!(describe("n_max", None, "", &rows), " Maximum rows");
        assert_eq!(describe("narm", None, "", &rows), " Drop missing");
    }

    #[test]
    fn table_strips_python_prefix() {
        let rows = table(&["python:size: python:Number of rows"]);
        assert_eq!(describe("size", None, "", &rows), " Number of rows");
    }

    #[test]
    fn table_requires_exact_name() {
        let rows = table(&["xlim: limits", "x: the data"]);
        assert_eq!(describe("x", None, "", &rows), " the data");
    }

    #[test]
    fn table_first_match_wins() {
        let rows = table(&["x: first", "x: second"]);
        assert_eq!(describe("x", None, "", &rows), " first");
    }

    #[test]
    fn no_match_is_empty() {
        let rows = table(&["no colon here"]);
        assert_eq!(describe("x", None, "plain text", &rows), "");
    }
}
