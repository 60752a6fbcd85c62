//! End-to-end resolution: topic in, validated reading URL out.

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use readscout_query::{build_query, official_docs_url};
use readscout_ranking::{Sources, filter_and_rank};
use readscout_shared::{AppConfig, RankedUrl, ResolveRequest, Result};
use readscout_topic::{extract_tech_keywords, is_meta_session, normalize};
use readscout_validation::UrlValidator;

// ---------------------------------------------------------------------------
// SearchProvider
// ---------------------------------------------------------------------------

/// Source of raw search-result blocks for a query string.
///
/// Each returned string is one "Title:/Link:/Snippet:" block. The resolver
/// treats a provider failure as an empty result set rather than aborting.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}

// ---------------------------------------------------------------------------
// ReadingResolver
// ---------------------------------------------------------------------------

/// Resolves a learning topic to a single validated reading URL.
pub struct ReadingResolver {
    validator: UrlValidator,
    sources: Sources,
    max_results: usize,
}

impl ReadingResolver {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            validator: UrlValidator::new(config.validation.clone())?,
            sources: Sources::default(),
            max_results: config.search.max_results,
        })
    }

    /// Resolve a request to the best validated reading URL.
    ///
    /// Returns `None` when the topic is empty or an assessment session, when
    /// filtering leaves no candidates, or when every surviving candidate
    /// fails validation. Known official-documentation anchors short-circuit
    /// before any search happens.
    #[instrument(skip(self, provider), fields(topic = %request.topic, category = %request.category))]
    pub async fn resolve(
        &self,
        provider: &dyn SearchProvider,
        request: &ResolveRequest,
    ) -> Option<String> {
        let prepared = self.prepare(request)?;

        if let Some(url) = official_docs_url(&prepared.topic, &prepared.keywords, request.category)
        {
            if request.prior_readings.iter().any(|p| p == url) {
                debug!(url, "official documentation already recommended, falling back to search");
            } else {
                info!(url, "resolved via official documentation");
                return Some(url.to_string());
            }
        }

        let ranked = self.search_and_rank(provider, request, &prepared).await;

        for candidate in ranked {
            if request.prior_readings.iter().any(|p| p == &candidate.url) {
                debug!(url = candidate.url, "skipping previously recommended URL");
                continue;
            }
            if self.validator.is_accessible(&candidate.url).await {
                info!(url = candidate.url, score = candidate.score, "resolved reading URL");
                return Some(candidate.url);
            }
            debug!(url = candidate.url, "candidate failed validation");
        }

        info!("no candidate survived filtering and validation");
        None
    }

    /// Run the pipeline up to ranking, without the official-docs
    /// short-circuit and without validating candidates. Useful for
    /// inspecting what the resolver would consider.
    #[instrument(skip(self, provider), fields(topic = %request.topic, category = %request.category))]
    pub async fn resolve_ranked(
        &self,
        provider: &dyn SearchProvider,
        request: &ResolveRequest,
    ) -> Vec<RankedUrl> {
        let Some(prepared) = self.prepare(request) else {
            return Vec::new();
        };
        self.search_and_rank(provider, request, &prepared).await
    }

    fn prepare(&self, request: &ResolveRequest) -> Option<Prepared> {
        let topic = normalize(&request.topic);
        if topic.is_empty() {
            debug!("topic normalizes to empty, nothing to resolve");
            return None;
        }
        if is_meta_session(&topic) {
            debug!(topic, "assessment session, skipping");
            return None;
        }

        let context = request.context.as_deref().unwrap_or("");
        let keywords = extract_tech_keywords(context);
        debug!(topic, ?keywords, "prepared request");

        Some(Prepared {
            topic,
            context: context.to_string(),
            keywords,
        })
    }

    async fn search_and_rank(
        &self,
        provider: &dyn SearchProvider,
        request: &ResolveRequest,
        prepared: &Prepared,
    ) -> Vec<RankedUrl> {
        let query = build_query(&prepared.topic, &prepared.context, request.category);

        let mut hits = match provider.search(&query).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, query, "search provider failed, treating as no results");
                Vec::new()
            }
        };
        hits.truncate(self.max_results);

        filter_and_rank(
            &hits,
            &prepared.topic,
            &prepared.keywords,
            request.category,
            &self.sources,
        )
    }
}

struct Prepared {
    topic: String,
    context: String,
    keywords: Vec<readscout_shared::TechKeyword>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use readscout_shared::{ReadScoutError, SubjectCategory};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FixedProvider(Vec<String>);

    #[async_trait]
    impl SearchProvider for FixedProvider {
        async fn search(&self, _query: &str) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl SearchProvider for FailingProvider {
        async fn search(&self, _query: &str) -> Result<Vec<String>> {
            Err(ReadScoutError::Network("search backend down".to_string()))
        }
    }

    fn resolver() -> ReadingResolver {
        let mut config = AppConfig::default();
        config.validation.timeout_secs = 5;
        config.validation.trusted_domains = vec![];
        ReadingResolver::new(&config).expect("build resolver")
    }

    fn block(link: &str, snippet: &str) -> String {
        format!("Title: result\nLink: {link}\nSnippet: {snippet}")
    }

    fn article_body() -> String {
        let para = "Pointers let a program refer to memory locations directly. \
                    Understanding them is essential for manual memory management. ";
        format!("<html><body><main>{}</main></body></html>", para.repeat(5))
    }

    #[tokio::test]
    async fn meta_sessions_resolve_to_nothing() {
        let resolver = resolver();
        let request = ResolveRequest::new(
            "Progress test 1",
            None,
            SubjectCategory::Programming,
        );
        assert_eq!(resolver.resolve(&FailingProvider, &request).await, None);
    }

    #[tokio::test]
    async fn empty_topic_resolves_to_nothing() {
        let resolver = resolver();
        let request = ResolveRequest::new("  1.  ", None, SubjectCategory::Default);
        assert_eq!(resolver.resolve(&FailingProvider, &request).await, None);
    }

    #[tokio::test]
    async fn official_docs_short_circuit_skips_search() {
        let resolver = resolver();
        let request = ResolveRequest::new(
            "3. Layout manager (LinearLayout, ConstraintLayout)",
            Some("Android Mobile Programming, Kotlin".to_string()),
            SubjectCategory::Programming,
        );
        // The provider fails outright, so a resolved URL proves the search
        // was never consulted.
        let resolved = resolver.resolve(&FailingProvider, &request).await;
        assert_eq!(
            resolved.as_deref(),
            Some("https://developer.android.com/develop/ui/views/layout/declaring-layout")
        );
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_none() {
        let resolver = resolver();
        let request = ResolveRequest::new(
            "Pointers and memory allocation",
            Some("C Programming".to_string()),
            SubjectCategory::Programming,
        );
        assert_eq!(resolver.resolve(&FailingProvider, &request).await, None);
    }

    #[tokio::test]
    async fn ranked_candidates_prefer_canonical_tutorials() {
        let resolver = resolver();
        let provider = FixedProvider(vec![
            block(
                "https://www.w3schools.com/python/python_intro.asp",
                "Learn Python, the popular programming language.",
            ),
            block(
                "https://www.learn-c.org/en/Pointers",
                "Learn about pointers and memory allocation in C.",
            ),
            block(
                "https://www.studytonight.com/c/pointers-in-c.php",
                "Pointers in C with examples.",
            ),
        ]);
        let request = ResolveRequest::new(
            "1. Pointers and memory allocation",
            Some("C Programming, Data Structures".to_string()),
            SubjectCategory::Programming,
        );

        let ranked = resolver.resolve_ranked(&provider, &request).await;
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].url.contains("learn-c.org"));
        assert!(ranked[1].url.contains("studytonight.com"));
    }

    #[tokio::test]
    async fn validation_falls_through_to_next_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pointers/memory/allocation/dead"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/pointers-memory"))
            .respond_with(ResponseTemplate::new(200).set_body_string(article_body()))
            .mount(&server)
            .await;

        let resolver = resolver();
        // Three topic tokens in the first URL outrank two in the second, so
        // the resolver must try the dead link first and move on.
        let provider = FixedProvider(vec![
            block(
                &format!("{}/pointers/memory/allocation/dead", server.uri()),
                "dead page",
            ),
            block(&format!("{}/pointers-memory", server.uri()), "live page"),
        ]);
        let request = ResolveRequest::new(
            "Pointers and memory allocation",
            None,
            SubjectCategory::Default,
        );

        let resolved = resolver.resolve(&provider, &request).await;
        assert_eq!(
            resolved,
            Some(format!("{}/pointers-memory", server.uri()))
        );
    }

    #[tokio::test]
    async fn prior_readings_are_skipped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pointers/memory/allocation"))
            .respond_with(ResponseTemplate::new(200).set_body_string(article_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/pointers-memory"))
            .respond_with(ResponseTemplate::new(200).set_body_string(article_body()))
            .mount(&server)
            .await;

        let resolver = resolver();
        let top = format!("{}/pointers/memory/allocation", server.uri());
        let provider = FixedProvider(vec![
            block(&top, "already read"),
            block(&format!("{}/pointers-memory", server.uri()), "fresh page"),
        ]);
        let mut request = ResolveRequest::new(
            "Pointers and memory allocation",
            None,
            SubjectCategory::Default,
        );
        request.prior_readings = vec![top];

        let resolved = resolver.resolve(&provider, &request).await;
        assert_eq!(
            resolved,
            Some(format!("{}/pointers-memory", server.uri()))
        );
    }

    #[tokio::test]
    async fn recommended_official_url_falls_back_to_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/android/layout-basics"))
            .respond_with(ResponseTemplate::new(200).set_body_string(article_body()))
            .mount(&server)
            .await;

        let resolver = resolver();
        let alternative = format!("{}/android/layout-basics", server.uri());
        let provider = FixedProvider(vec![block(&alternative, "Declaring layouts in XML.")]);
        let mut request = ResolveRequest::new(
            "3. Layout manager (LinearLayout, ConstraintLayout)",
            Some("Android Mobile Programming, Kotlin".to_string()),
            SubjectCategory::Programming,
        );
        request.prior_readings = vec![
            "https://developer.android.com/develop/ui/views/layout/declaring-layout".to_string(),
        ];

        let resolved = resolver.resolve(&provider, &request).await;
        assert_eq!(resolved, Some(alternative));
    }

    #[tokio::test]
    async fn result_list_is_capped_before_ranking() {
        let mut config = AppConfig::default();
        config.search.max_results = 1;
        config.validation.trusted_domains = vec![];
        let resolver = ReadingResolver::new(&config).expect("build resolver");

        let provider = FixedProvider(vec![
            block("https://example.com/pointers-overview", "first hit"),
            block("https://www.learn-c.org/en/Pointers", "second hit, better"),
        ]);
        let request = ResolveRequest::new(
            "Pointers",
            Some("C Programming".to_string()),
            SubjectCategory::Programming,
        );

        let ranked = resolver.resolve_ranked(&provider, &request).await;
        // Only the first raw result survives the cap.
        assert!(ranked.iter().all(|r| !r.url.contains("learn-c.org")));
    }
}
