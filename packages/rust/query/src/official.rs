//! Curated official-documentation short-circuits.
//!
//! For a handful of well-known technology anchors we know the canonical
//! documentation page outright, so live search can be skipped entirely.
//! Topic substrings sub-route to deep-link pages where one exists.

use readscout_shared::{SubjectCategory, TechKeyword, has_keyword};
use tracing::debug;

/// Return a curated canonical documentation URL for the topic, or `None`
/// to let the caller fall through to live search.
///
/// Only fires for Programming/ComputerScience and a recognized keyword
/// anchor (android, asp.net/c#, react).
pub fn official_docs_url(
    topic: &str,
    keywords: &[TechKeyword],
    category: SubjectCategory,
) -> Option<&'static str> {
    if !category.is_technical() {
        return None;
    }

    let t = topic.to_lowercase();

    let url = if has_keyword(keywords, "android") {
        Some(android_docs(&t))
    } else if has_keyword(keywords, "asp.net") || has_keyword(keywords, "c#") {
        Some(dotnet_docs(&t, has_keyword(keywords, "asp.net")))
    } else if has_keyword(keywords, "react") {
        Some(react_docs(&t))
    } else {
        None
    };

    if let Some(url) = url {
        debug!(topic, url, "official documentation short-circuit");
    }
    url
}

fn android_docs(topic: &str) -> &'static str {
    if topic.contains("activity") {
        "https://developer.android.com/guide/components/activities/intro-activities"
    } else if topic.contains("fragment") {
        "https://developer.android.com/guide/fragments"
    } else if topic.contains("recycler") {
        "https://developer.android.com/develop/ui/views/layout/recyclerview"
    } else if topic.contains("layout") {
        "https://developer.android.com/develop/ui/views/layout/declaring-layout"
    } else if topic.contains("intent") {
        "https://developer.android.com/guide/components/intents-filters"
    } else {
        "https://developer.android.com/guide"
    }
}

fn dotnet_docs(topic: &str, aspnet: bool) -> &'static str {
    if topic.contains("mvc") {
        "https://learn.microsoft.com/en-us/aspnet/core/mvc/overview"
    } else if topic.contains("razor") {
        "https://learn.microsoft.com/en-us/aspnet/core/razor-pages/"
    } else if topic.contains("linq") {
        "https://learn.microsoft.com/en-us/dotnet/csharp/linq/"
    } else if aspnet {
        "https://learn.microsoft.com/en-us/aspnet/core/"
    } else {
        "https://learn.microsoft.com/en-us/dotnet/csharp/"
    }
}

fn react_docs(topic: &str) -> &'static str {
    if topic.contains("hook") {
        "https://react.dev/reference/react/hooks"
    } else if topic.contains("component") {
        "https://react.dev/learn/your-first-component"
    } else if topic.contains("state") {
        "https://react.dev/learn/state-a-components-memory"
    } else {
        "https://react.dev/learn"
    }
}
