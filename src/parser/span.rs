//! Sentinel-delimited span extraction.

/// Extract the text between `start` and `end` sentinels.
///
/// Both sentinels must occur somewhere in `text`, otherwise `None`. The span
/// begins right after the first `start` and runs to the first `end` that
/// follows it, or to the end of `text` when `end` only appears earlier.
pub fn find_span<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    if !text.contains(end) {
        return None;
    }
    let (_, after) = text.split_once(start)?;
    Some(after.split_once(end).map_or(after, |(span, _)| span))
}

/// Text after the first occurrence of `marker`.
pub fn after_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.split_once(marker).map(|(_, rest)| rest)
}

/// Text before the first occurrence of `marker`, or all of `text`.
pub fn before_marker<'a>(text: &'a str, marker: &str) -> &'a str {
    text.split_once(marker).map_or(text, |(head, _)| head)
}
