//! Search-result filtering and prioritization.
//!
//! Orchestrates parse → reject-untrusted → reject-wrong-framework → score →
//! sort for a batch of raw search-result blocks. Output order encodes rank.

use readscout_shared::{RankedUrl, Relevance, SubjectCategory, TechKeyword};
use tracing::debug;

use crate::parser;
use crate::score::{self, conflicting_tech};
use crate::sources::{Sources, any_match};

/// Multi-language tutorial aggregators where the sub-path names the
/// language, so sub-path correctness must be enforced.
const AGGREGATOR_DOMAINS: &[&str] = &["w3schools.com", "programiz.com", "tutorialspoint.com"];

/// Filter raw search-result blocks and return surviving URLs ranked by
/// descending relevance score. The sort is stable: equal scores keep their
/// search-result order.
pub fn filter_and_rank(
    hits: &[String],
    topic: &str,
    keywords: &[TechKeyword],
    category: SubjectCategory,
    sources: &Sources,
) -> Vec<RankedUrl> {
    let mut ranked: Vec<RankedUrl> = Vec::new();

    for raw in hits {
        let Some(url) = parser::hit_url(raw) else {
            debug!("skipping result without a Link line");
            continue;
        };
        let url_l = url.to_lowercase();

        if is_untrusted(&url_l, category, sources) {
            debug!(url, "skipping untrusted source");
            continue;
        }

        if category.is_technical() && is_wrong_framework(&url_l, keywords) {
            debug!(url, "skipping wrong-framework source");
            continue;
        }

        match score::relevance(&url, raw, topic, keywords, category, sources) {
            Relevance::Accept(score) if score > 0 => ranked.push(RankedUrl { url, score }),
            verdict => {
                debug!(url, ?verdict, "skipping low-relevance source");
            }
        }
    }

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(candidates = ranked.len(), "filtered and ranked search results");
    ranked
}

/// Whether a URL comes from an untrusted source for the given category.
///
/// The universal blocklist (documents, slides, archives) applies to every
/// category; Programming/ComputerScience additionally reject Q&A forums,
/// video platforms, paper repositories, and course marketplaces.
pub fn is_untrusted(url_lower: &str, category: SubjectCategory, sources: &Sources) -> bool {
    if any_match(sources.universal_blocked, url_lower) {
        return true;
    }
    category.is_technical() && any_match(sources.untrusted_for_programming, url_lower)
}

/// Whether a URL points at a sibling technology's content.
///
/// Rejects URLs whose path names a technology that is not in the extracted
/// keyword set, and enforces exact sub-path correctness on multi-language
/// tutorial aggregators. With no keywords there is nothing to conflict with.
pub fn is_wrong_framework(url_lower: &str, keywords: &[TechKeyword]) -> bool {
    if keywords.is_empty() {
        return false;
    }

    if conflicting_tech(url_lower, keywords).is_some() {
        return true;
    }

    if AGGREGATOR_DOMAINS.iter().any(|d| url_lower.contains(d)) {
        let wanted: Vec<&str> = keywords
            .iter()
            .flat_map(|k| aggregator_paths(k.as_str()))
            .copied()
            .collect();
        if !wanted.is_empty() && !wanted.iter().any(|p| url_lower.contains(p)) {
            return true;
        }
    }

    false
}

/// Aggregator sub-paths that legitimately belong to a keyword.
fn aggregator_paths(keyword: &str) -> &'static [&'static str] {
    match keyword {
        "c" => &["/c/", "/c_"],
        "c++" => &["/cpp"],
        "c#" => &["/cs/", "/csharp"],
        "java" => &["/java/"],
        "javascript" => &["/js/", "/javascript"],
        "typescript" => &["/typescript"],
        "python" => &["/python"],
        "sql" => &["/sql"],
        "database" => &["/sql", "/mysql"],
        "kotlin" => &["/kotlin"],
        "react" => &["/react"],
        "nodejs" => &["/nodejs"],
        "android" => &["/android"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(tags: &[&str]) -> Vec<TechKeyword> {
        tags.iter().map(|t| TechKeyword::new(*t)).collect()
    }

    fn block(link: &str, snippet: &str) -> String {
        format!("Title: result\nLink: {link}\nSnippet: {snippet}")
    }

    #[test]
    fn documents_blocked_for_every_category() {
        let sources = Sources::default();
        let hits = vec![
            block("https://example.com/lecture.pdf", "slides"),
            block("https://www.scribd.com/document/42", "notes"),
        ];

        for category in [
            SubjectCategory::Programming,
            SubjectCategory::History,
            SubjectCategory::Default,
        ] {
            let ranked = filter_and_rank(&hits, "pointers", &[], category, &sources);
            assert!(ranked.is_empty(), "expected no candidates for {category}");
        }
    }

    #[test]
    fn qa_forums_blocked_only_for_technical_categories() {
        let sources = Sources::default();
        let url = "https://stackoverflow.com/questions/12345/pointers-explained";
        assert!(is_untrusted(url, SubjectCategory::Programming, &sources));
        assert!(is_untrusted(url, SubjectCategory::ComputerScience, &sources));
        assert!(!is_untrusted(url, SubjectCategory::History, &sources));
        assert!(!is_untrusted(url, SubjectCategory::Default, &sources));
    }

    #[test]
    fn wrong_framework_sibling_path() {
        let keywords = kws(&["c", "c++"]);
        assert!(is_wrong_framework(
            "https://www.w3schools.com/python/python_intro.asp",
            &keywords
        ));
        assert!(!is_wrong_framework(
            "https://www.w3schools.com/c/c_pointers.php",
            &keywords
        ));
    }

    #[test]
    fn wrong_framework_allows_sibling_present_in_context() {
        let keywords = kws(&["java", "javascript"]);
        assert!(!is_wrong_framework(
            "https://developer.mozilla.org/en-us/docs/web/javascript/guide",
            &keywords
        ));
    }

    #[test]
    fn aggregator_requires_matching_subpath() {
        let keywords = kws(&["c"]);
        // w3schools page for an unrelated area, no recognized language path
        assert!(is_wrong_framework(
            "https://www.w3schools.com/howto/howto_js_topnav.asp",
            &keywords
        ));
        // non-aggregator domains are not sub-path constrained
        assert!(!is_wrong_framework(
            "https://www.geeksforgeeks.org/pointers-in-c-and-c-set-1-introduction/",
            &keywords
        ));
    }

    #[test]
    fn no_keywords_disables_framework_checks() {
        assert!(!is_wrong_framework(
            "https://www.w3schools.com/python/python_intro.asp",
            &[]
        ));
    }

    #[test]
    fn ranking_orders_by_descending_score() {
        let sources = Sources::default();
        let hits = vec![
            block(
                "https://example.com/pointers",
                "Plain page mentioning pointers.",
            ),
            block(
                "https://www.learn-c.org/en/Pointers",
                "Pointers in C with exercises.",
            ),
        ];
        let ranked = filter_and_rank(
            &hits,
            "Pointers and memory allocation",
            &kws(&["c"]),
            SubjectCategory::Programming,
            &sources,
        );
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].url.contains("learn-c.org"));
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn fixture_scenario_c_pointers() {
        let sources = Sources::default();
        let payload = std::fs::read_to_string("../../../fixtures/results/c-programming.txt")
            .expect("read results fixture");
        let hits = parser::split_blocks(&payload);
        assert_eq!(hits.len(), 5);

        let ranked = filter_and_rank(
            &hits,
            "Pointers and memory allocation",
            &kws(&["c"]),
            SubjectCategory::Programming,
            &sources,
        );

        // python page and pdf/scribd are gone, malformed block skipped
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].url.contains("learn-c.org"));
        assert!(ranked[1].url.contains("studytonight.com"));
        assert!(ranked.iter().all(|r| !r.url.contains("python")));
        assert!(ranked.iter().all(|r| !r.url.contains(".pdf")));
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let sources = Sources::default();
        let hits = vec![
            block("https://example.com/one/pointers", "first"),
            block("https://example.com/two/pointers", "second"),
        ];
        let ranked = filter_and_rank(
            &hits,
            "Pointers",
            &[],
            SubjectCategory::Default,
            &sources,
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert!(ranked[0].url.contains("/one/"));
        assert!(ranked[1].url.contains("/two/"));
    }
}
