//! Liveness and content validation for chosen reading URLs.
//!
//! A ranked candidate is only returned to the caller once a probe confirms
//! the page is reachable and actually carries content: not a soft 404, not
//! a paywall, not an empty shell. Every failure mode — timeout, DNS,
//! connection refused, bad status — degrades to "inaccessible" rather than
//! propagating an error (fail-closed).

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, instrument};
use url::Url;

use readscout_shared::{ReadScoutError, Result, ValidationConfig};

/// Browser-like User-Agent; some educational sites serve bots a stub page.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Maximum redirects to follow during probes.
const MAX_REDIRECTS: usize = 5;

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex"));
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid regex"));
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

// ---------------------------------------------------------------------------
// UrlValidator
// ---------------------------------------------------------------------------

/// Validates that a URL is live and serves real content.
pub struct UrlValidator {
    client: Client,
    config: ValidationConfig,
}

impl UrlValidator {
    /// Create a validator with the given configuration.
    pub fn new(config: ValidationConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9,vi;q=0.8"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReadScoutError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Check whether a URL is accessible and serves real content.
    ///
    /// Never returns an error: anything that goes wrong counts as
    /// inaccessible.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn is_accessible(&self, url: &str) -> bool {
        match self.probe(url).await {
            Ok(accessible) => accessible,
            Err(e) => {
                debug!(error = %e, "validation probe failed, treating as inaccessible");
                false
            }
        }
    }

    async fn probe(&self, url: &str) -> Result<bool> {
        // Cheap HEAD probe first. Some servers reject HEAD outright, so a
        // failure here is tolerated and the GET below decides.
        match self.client.head(url).send().await {
            Ok(resp) => debug!(status = %resp.status(), "HEAD probe"),
            Err(e) => debug!(error = %e, "HEAD probe failed, falling back to GET"),
        }

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ReadScoutError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if status.as_u16() >= 400 || !status.is_success() {
            debug!(%status, "rejected: bad status");
            return Ok(false);
        }

        // Non-HTML responses (images, JSON, plain text downloads) cannot be
        // sniffed for soft-404s; a success status is good enough.
        if let Some(ct) = response.headers().get(CONTENT_TYPE) {
            let ct = ct.to_str().unwrap_or_default().to_lowercase();
            if !ct.is_empty() && !ct.contains("html") {
                debug!(content_type = %ct, "accepted: non-HTML content");
                return Ok(true);
            }
        }

        // Trusted hosts render client-side; their initial HTML is nearly
        // empty, so content sniffing would wrongly reject them.
        if self.is_trusted_host(url) {
            debug!("accepted: trusted domain, skipping content sniffing");
            return Ok(true);
        }

        // Stream the body and stop at the sniff window so an oversized
        // download URL never gets pulled down whole.
        let mut sniffed: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ReadScoutError::Network(format!("{url}: body read failed: {e}")))?
        {
            sniffed.extend_from_slice(&chunk);
            if sniffed.len() >= self.config.max_sniff_bytes {
                sniffed.truncate(self.config.max_sniff_bytes);
                break;
            }
        }
        let body = String::from_utf8_lossy(&sniffed).to_lowercase();

        if let Some(phrase) = first_phrase_match(&body, &self.config.soft_404_phrases) {
            debug!(phrase, "rejected: soft-404 page");
            return Ok(false);
        }

        if let Some(phrase) = first_phrase_match(&body, &self.config.paywall_phrases) {
            debug!(phrase, "rejected: paywalled content");
            return Ok(false);
        }

        let text = visible_text(&body);
        if text.chars().count() < self.config.min_visible_chars {
            debug!(visible_chars = text.chars().count(), "rejected: too little visible text");
            return Ok(false);
        }

        Ok(true)
    }

    fn is_trusted_host(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        self.config
            .trusted_domains
            .iter()
            .any(|d| host == d || host.ends_with(&format!(".{d}")))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn first_phrase_match<'a>(body: &str, phrases: &'a [String]) -> Option<&'a str> {
    phrases
        .iter()
        .find(|p| body.contains(p.as_str()))
        .map(|p| p.as_str())
}

/// Extract visible text from an HTML body: strip script/style/comments/tags,
/// decode common entities, collapse whitespace.
fn visible_text(html: &str) -> String {
    let no_script = SCRIPT_RE.replace_all(html, " ");
    let no_style = STYLE_RE.replace_all(&no_script, " ");
    let no_comments = COMMENT_RE.replace_all(&no_style, " ");
    let no_tags = TAG_RE.replace_all(&no_comments, " ");

    let decoded = no_tags
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    WS_RE.replace_all(decoded.trim(), " ").to_string()
}
