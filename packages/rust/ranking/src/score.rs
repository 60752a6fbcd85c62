//! Relevance scoring for a single URL/result pair.
//!
//! Positive signal accumulates from many weak heuristics; rejection is
//! concentrated in one high-priority per-family gate so a single
//! wrong-language match reliably overrides any number of weak positives.

use readscout_shared::{Relevance, SubjectCategory, TechKeyword, has_keyword};
use tracing::debug;

use crate::parser;
use crate::sources::{Sources, any_match};

/// Path/domain fragments that identify a specific technology. A candidate
/// containing a fragment is rejected unless the owning keyword was itself
/// extracted from the context.
pub(crate) const TECH_PATH_RULES: &[(&str, &str)] = &[
    ("/python", "python"),
    ("/java/", "java"),
    ("/javascript", "javascript"),
    ("/js/", "javascript"),
    ("/typescript", "typescript"),
    ("/cpp", "c++"),
    ("/c++", "c++"),
    ("/csharp", "c#"),
    ("/cs/", "c#"),
    ("/kotlin", "kotlin"),
    ("/swift", "ios"),
    ("/flutter", "flutter"),
    ("/react", "react"),
    ("/vue", "vue"),
    ("/angular", "angular"),
    ("/nodejs", "nodejs"),
    ("/sql", "sql"),
    ("/php", "php"),
    ("/ruby", "ruby"),
    ("/golang", "go"),
];

/// Canonical documentation domains per technology family:
/// (domains, triggering keywords, bonus).
const CANONICAL_DOCS: &[(&[&str], &[&str], i32)] = &[
    (&["cppreference.com", "learn-c.org", "learncpp.com"], &["c", "c++"], 1500),
    (&["docs.oracle.com"], &["java"], 800),
    (&["baeldung.com"], &["java", "spring"], 700),
    (&["learn.microsoft.com", "docs.microsoft.com"], &["c#", ".net", "asp.net"], 1000),
    (&["python.org", "realpython.com"], &["python"], 1000),
    (&["developer.android.com"], &["android", "kotlin"], 1200),
    (&["kotlinlang.org"], &["kotlin"], 1000),
    (&["flutter.dev", "dart.dev"], &["flutter"], 1000),
    (&["react.dev", "reactjs.org"], &["react"], 1000),
    (&["vuejs.org"], &["vue"], 1000),
    (&["angular.io", "angular.dev"], &["angular"], 1000),
    (&["nodejs.org"], &["nodejs"], 1000),
    (&["typescriptlang.org"], &["typescript"], 1000),
    (&["developer.mozilla.org"], &["javascript", "typescript", "nodejs"], 900),
];

/// Small (domain, required-keyword) table recognized for every category.
const OFFICIAL_DOC_DOMAINS: &[(&str, &[&str])] = &[
    ("docs.python.org", &["python"]),
    ("developer.android.com", &["android", "kotlin"]),
    ("learn.microsoft.com", &["c#", ".net", "asp.net"]),
    ("docs.oracle.com", &["java"]),
    ("react.dev", &["react"]),
    ("kotlinlang.org", &["kotlin"]),
    ("developer.mozilla.org", &["javascript", "typescript"]),
];

/// Language names sniffed in snippet text: (mention, owning keyword).
/// A mention whose owner is not in the context costs a small penalty.
const SNIPPET_LANGS: &[(&str, &str)] = &[
    ("python", "python"),
    ("java", "java"),
    ("javascript", "javascript"),
    ("c++", "c++"),
    ("c#", "c#"),
    ("kotlin", "kotlin"),
    ("swift", "ios"),
    ("php", "php"),
    ("ruby", "ruby"),
];

/// Score a URL/result pair against topic, keywords, and category.
pub fn relevance(
    url: &str,
    raw: &str,
    topic: &str,
    keywords: &[TechKeyword],
    category: SubjectCategory,
    sources: &Sources,
) -> Relevance {
    let url_l = url.to_lowercase();
    let snippet_l = parser::hit_snippet(raw)
        .unwrap_or_else(|| raw.to_string())
        .to_lowercase();

    // Dominant rejection gate: a wrong-technology path fragment overrides
    // every positive signal.
    if category.is_technical() && !keywords.is_empty() {
        if let Some(tech) = conflicting_tech(&url_l, keywords) {
            debug!(url, tech, "rejected: conflicting technology in url");
            return Relevance::Reject;
        }
    }

    let mut score = 0i32;

    match category {
        SubjectCategory::Programming | SubjectCategory::ComputerScience => {
            score += technical_score(&url_l, &snippet_l, keywords, sources);
        }
        SubjectCategory::VietnamesePolitics
        | SubjectCategory::History
        | SubjectCategory::VietnameseLiterature
        | SubjectCategory::Science
        | SubjectCategory::Business => {
            score += trust_tier_score(&url_l, sources);
        }
        SubjectCategory::Default => {}
    }

    score += topic_token_score(&url_l, topic);
    score += official_domain_score(&url_l, keywords);

    Relevance::Accept(score)
}

/// First technology fragment in the URL whose owning keyword is absent
/// from the context, if any.
pub(crate) fn conflicting_tech(url_l: &str, keywords: &[TechKeyword]) -> Option<&'static str> {
    TECH_PATH_RULES
        .iter()
        .find(|(frag, owner)| url_l.contains(frag) && !has_keyword(keywords, owner))
        .map(|(_, owner)| *owner)
}

fn technical_score(
    url_l: &str,
    snippet_l: &str,
    keywords: &[TechKeyword],
    sources: &Sources,
) -> i32 {
    let mut score = 0;

    if any_match(sources.tutorial_sites, url_l) {
        score += 1000;
    }
    if any_match(sources.community_blogs, url_l) {
        score += 900;
    }

    for kw in keywords {
        if mentions(url_l, kw.as_str()) {
            score += 500;
        }
        if mentions(snippet_l, kw.as_str()) {
            score += 100;
        }
    }

    for (domains, triggers, bonus) in CANONICAL_DOCS {
        if domains.iter().any(|d| url_l.contains(d))
            && triggers.iter().any(|t| has_keyword(keywords, t))
        {
            score += bonus;
        }
    }

    // Off-context language mentions in the snippet cost a little; the hard
    // rejection above already handled wrong-language URLs.
    if !keywords.is_empty() {
        for (mention, owner) in SNIPPET_LANGS {
            if mentions(snippet_l, mention) && !has_keyword(keywords, owner) {
                score -= 300;
            }
        }
    }

    score
}

/// Purely additive domain-trust tiers for non-technical categories.
fn trust_tier_score(url_l: &str, sources: &Sources) -> i32 {
    let mut score = 0;
    if any_match(sources.government, url_l) {
        score += 1000;
    }
    if any_match(sources.vietnamese_edu, url_l) {
        score += 900;
    }
    if any_match(sources.wikipedia, url_l) {
        score += 800;
    }
    if any_match(sources.news, url_l) {
        score += 700;
    }
    if any_match(sources.academic, url_l) {
        score += 600;
    }
    score
}

/// +200 per topic token (length > 3) literally present in the URL.
fn topic_token_score(url_l: &str, topic: &str) -> i32 {
    topic
        .to_lowercase()
        .split_whitespace()
        .filter(|tok| tok.chars().count() > 3)
        .filter(|tok| url_l.contains(*tok))
        .count() as i32
        * 200
}

/// +300 when the URL belongs to a recognized official-doc domain and one of
/// its required keywords is in context.
fn official_domain_score(url_l: &str, keywords: &[TechKeyword]) -> i32 {
    for (domain, required) in OFFICIAL_DOC_DOMAINS {
        if url_l.contains(domain) && required.iter().any(|k| has_keyword(keywords, k)) {
            return 300;
        }
    }
    0
}

/// Keyword-aware containment check.
///
/// "java" must never match inside "javascript", and "c" only matches as a
/// standalone token; everything else is a plain substring test.
fn mentions(text: &str, tag: &str) -> bool {
    match tag {
        "java" => {
            let mut start = 0;
            while let Some(pos) = text[start..].find("java") {
                let abs = start + pos;
                if !text[abs + 4..].starts_with("script") {
                    return true;
                }
                start = abs + 4;
            }
            false
        }
        "c" => text
            .split(|ch: char| !ch.is_alphanumeric() && ch != '+' && ch != '#')
            .any(|tok| tok == "c"),
        _ => text.contains(tag),
    }
}
