//! Topic-string normalization.
//!
//! Syllabus topics arrive as strings like "1. Pointers and memory allocation"
//! or "Section 3: Layout manager (LinearLayout, ConstraintLayout)". Each
//! cleanup pass is a small function applied in sequence; the whole pipeline
//! is idempotent.

use std::sync::LazyLock;

use regex::Regex;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Leading ordinal / "Section N" / "Chapter N" prefix on a topic segment.
/// Requires whitespace or end-of-segment after the ordinal so that tokens
/// like "3D" survive.
static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:(?:section|chapter|bài|chương)\s+)?\d+[:.)]?(?:\s+|$)")
        .expect("valid regex")
});

/// Anything that is not a Unicode letter, digit, or whitespace.
/// Vietnamese diacritics are letters and pass through untouched.
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("valid regex"));

/// Tokens marking an assessment session rather than learnable content.
const META_TOKENS: &[&str] = &[
    "review",
    "progress test",
    "midterm",
    "final exam",
    "quiz",
    "exercise",
    "assignment",
];

/// Normalize a raw topic string into a clean, searchable form.
///
/// Trims and collapses whitespace, splits on `.`/`;`, strips leading
/// ordinal/"Section N"/"Chapter N" prefixes per segment, rejoins, and
/// removes punctuation. Empty input yields an empty string, and the
/// function is idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(topic: &str) -> String {
    // Punctuation removal can expose a fresh leading ordinal ("(1) Foo"
    // becomes "1 Foo"), so the whole pass runs to a fixpoint.
    let mut cur = normalize_once(topic);
    loop {
        let next = normalize_once(&cur);
        if next == cur {
            return cur;
        }
        cur = next;
    }
}

fn normalize_once(topic: &str) -> String {
    let collapsed = collapse_whitespace(topic.trim());

    let kept: Vec<String> = collapsed
        .split(['.', ';'])
        .map(strip_ordinal_prefix)
        .filter(|seg| !seg.is_empty())
        .collect();

    let joined = kept.join(" ");
    let cleaned = NON_ALNUM_RE.replace_all(&joined, " ");

    collapse_whitespace(cleaned.trim())
}

/// Whether a topic names an assessment session (review, exam, quiz, …)
/// rather than content worth searching a reading for.
pub fn is_meta_session(topic: &str) -> bool {
    let lower = topic.to_lowercase();
    META_TOKENS.iter().any(|t| lower.contains(t))
}

fn collapse_whitespace(s: &str) -> String {
    WS_RE.replace_all(s, " ").to_string()
}

/// Strip leading ordinal prefixes from one segment, repeating until stable
/// so stacked prefixes ("12 3) Foo") cannot survive a single pass.
fn strip_ordinal_prefix(seg: &str) -> String {
    let mut cur = seg.trim().to_string();
    loop {
        let next = PREFIX_RE.replace(&cur, "").trim_start().to_string();
        if next == cur {
            return cur;
        }
        cur = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_ordinal_prefix() {
        assert_eq!(
            normalize("1. Pointers and memory allocation"),
            "Pointers and memory allocation"
        );
        assert_eq!(normalize("Section 2. Arrays and Strings"), "Arrays and Strings");
        assert_eq!(normalize("Chapter 10: Recursion"), "Recursion");
    }

    #[test]
    fn normalize_strips_parenthesized_ordinal() {
        // The parentheses hide the ordinal from the first prefix pass.
        assert_eq!(
            normalize("(1) Pointers and memory allocation"),
            "Pointers and memory allocation"
        );
    }

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(
            normalize("Layout manager (LinearLayout, ConstraintLayout)"),
            "Layout manager LinearLayout ConstraintLayout"
        );
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Pointers   and\tarrays  "), "Pointers and arrays");
    }

    #[test]
    fn normalize_keeps_vietnamese_letters() {
        assert_eq!(
            normalize("Bài 5. Tư tưởng Hồ Chí Minh"),
            "Tư tưởng Hồ Chí Minh"
        );
    }

    #[test]
    fn normalize_keeps_embedded_digits() {
        // "3D" has no boundary after the digit, so it is not an ordinal.
        assert_eq!(normalize("3D Graphics"), "3D Graphics");
        assert_eq!(normalize("Java 8 Streams"), "Java 8 Streams");
    }

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("1."), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "1. Pointers and memory allocation",
            "Section 2. Arrays; Strings",
            "Layout manager (LinearLayout, ConstraintLayout)",
            "12 3) Stacked prefixes",
            "(1) Pointers and memory allocation",
            "Bài 5. Tư tưởng Hồ Chí Minh",
            "",
            "plain topic",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn meta_session_detection() {
        assert!(is_meta_session("Progress Test 1"));
        assert!(is_meta_session("Final Exam"));
        assert!(is_meta_session("review of unit 3"));
        assert!(is_meta_session("Assignment 2: Linked Lists"));
        assert!(!is_meta_session("Layout Manager"));
        assert!(!is_meta_session("Pointers and memory allocation"));
    }
}
