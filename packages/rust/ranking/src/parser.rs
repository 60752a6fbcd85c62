//! Parsing of raw search-result text blocks.
//!
//! The search collaborator returns flat text blocks with "Title:/Link:/
//! Snippet:" lines rather than structured data. Only the Link line is
//! required; everything else is best-effort.

/// Extract the URL from one raw search-result block: the trimmed remainder
/// of the first line starting with "Link:" (case-insensitive). Returns
/// `None` when the line is absent or empty — callers skip such candidates.
pub fn hit_url(raw: &str) -> Option<String> {
    field_line(raw, "link:")
}

/// Extract the snippet text, if a "Snippet:" line is present.
pub fn hit_snippet(raw: &str) -> Option<String> {
    field_line(raw, "snippet:")
}

/// Extract the title, if a "Title:" line is present.
pub fn hit_title(raw: &str) -> Option<String> {
    field_line(raw, "title:")
}

/// Split a multi-result text payload into individual blocks on blank lines.
pub fn split_blocks(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect()
}

fn field_line(raw: &str, prefix: &str) -> Option<String> {
    for line in raw.lines() {
        let trimmed = line.trim();
        // get() avoids panicking on a multi-byte boundary in non-ASCII lines
        let Some(head) = trimmed.get(..prefix.len()) else {
            continue;
        };
        if head.eq_ignore_ascii_case(prefix) {
            let value = trimmed[prefix.len()..].trim();
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }
    }
    None
}
