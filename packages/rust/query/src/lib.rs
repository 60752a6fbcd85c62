//! Search-query construction and official-documentation short-circuits.
//!
//! Before going out to a web search at all, the resolver asks
//! [`official_docs_url`] whether the topic maps to a curated canonical
//! documentation page. Only when that returns `None` does it build a
//! category-aware query string with [`build_query`].

mod official;

use readscout_shared::SubjectCategory;
use tracing::debug;

pub use official::official_docs_url;

/// Vietnamese connective words used to detect Vietnamese-language topics
/// in the `Default` category.
const VIETNAMESE_CONNECTIVES: &[&str] = &[" và ", " của ", " là ", " được ", " trong "];

/// Build one search-query string for a normalized topic, branching
/// entirely on the subject category.
pub fn build_query(topic: &str, context: &str, category: SubjectCategory) -> String {
    let query = match category {
        SubjectCategory::Programming => {
            // Lead with up to three context segments so the search engine
            // sees the technology before the topic.
            let tokens: Vec<&str> = context
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .take(3)
                .collect();
            if tokens.is_empty() {
                format!("{topic} tutorial")
            } else {
                format!("{} {topic} tutorial", tokens.join(" "))
            }
        }
        SubjectCategory::ComputerScience => format!("{topic} guide tutorial explanation"),
        SubjectCategory::VietnamesePolitics => format!("{topic} lý luận chính trị giải thích"),
        SubjectCategory::History => format!("{topic} lịch sử tóm tắt sự kiện"),
        SubjectCategory::VietnameseLiterature => format!("{topic} phân tích văn học"),
        SubjectCategory::Science => format!("{topic} khái niệm khoa học giải thích"),
        SubjectCategory::Business => format!("{topic} kiến thức kinh doanh hướng dẫn"),
        SubjectCategory::Default => {
            if looks_vietnamese(topic) {
                format!("{topic} là gì giải thích chi tiết")
            } else {
                format!("{topic} explained in detail guide")
            }
        }
    };

    debug!(%category, query, "built search query");
    query
}

/// Heuristic Vietnamese detection over common connective words.
fn looks_vietnamese(topic: &str) -> bool {
    let lower = topic.to_lowercase();
    VIETNAMESE_CONNECTIVES.iter().any(|w| lower.contains(w))
}
