//! Core domain types for the reading-URL resolution pipeline.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SubjectCategory
// ---------------------------------------------------------------------------

/// Subject classification driving query construction and scoring strategy.
///
/// The category is resolved upstream (outside this pipeline) and arrives as
/// an opaque input. It is resolved exactly once per request and gates both
/// the query builder and the scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectCategory {
    Programming,
    ComputerScience,
    VietnamesePolitics,
    History,
    VietnameseLiterature,
    Science,
    Business,
    Default,
}

impl SubjectCategory {
    /// Categories that use the technical (keyword-driven) scoring strategy
    /// and the programming blocklist.
    pub fn is_technical(self) -> bool {
        matches!(self, Self::Programming | Self::ComputerScience)
    }
}

impl std::fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Programming => "programming",
            Self::ComputerScience => "computer-science",
            Self::VietnamesePolitics => "vietnamese-politics",
            Self::History => "history",
            Self::VietnameseLiterature => "vietnamese-literature",
            Self::Science => "science",
            Self::Business => "business",
            Self::Default => "default",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SubjectCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "programming" => Ok(Self::Programming),
            "computer-science" | "cs" => Ok(Self::ComputerScience),
            "vietnamese-politics" | "politics" => Ok(Self::VietnamesePolitics),
            "history" => Ok(Self::History),
            "vietnamese-literature" | "literature" => Ok(Self::VietnameseLiterature),
            "science" => Ok(Self::Science),
            "business" => Ok(Self::Business),
            "default" => Ok(Self::Default),
            other => Err(format!("unknown subject category '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// TechKeyword
// ---------------------------------------------------------------------------

/// A normalized lowercase technology tag inferred from free-text context.
///
/// The vocabulary is open but curated: `c`, `c++`, `c#`, `.net`, `asp.net`,
/// `java`, `java-web`, `spring`, `nodejs`, `react`, `vue`, `angular`,
/// `javascript`, `typescript`, `android`, `kotlin`, `flutter`, `ios`,
/// `sql`, `database`, `python`, …
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechKeyword(String);

impl TechKeyword {
    /// Create a keyword, normalizing to lowercase.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TechKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TechKeyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check whether a keyword set contains a given tag.
pub fn has_keyword(keywords: &[TechKeyword], tag: &str) -> bool {
    keywords.iter().any(|k| k.as_str() == tag)
}

// ---------------------------------------------------------------------------
// Relevance
// ---------------------------------------------------------------------------

/// Scoring verdict for a single candidate.
///
/// `Reject` replaces the legacy numeric rejection sentinel: a single
/// wrong-technology match forces exclusion regardless of how much positive
/// signal the candidate accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    /// Candidate passed the rejection gates; positive scores survive filtering.
    Accept(i32),
    /// Candidate is excluded outright.
    Reject,
}

impl Relevance {
    pub fn is_accept(self) -> bool {
        matches!(self, Self::Accept(_))
    }

    /// The accumulated score, if the candidate was not rejected.
    pub fn score(self) -> Option<i32> {
        match self {
            Self::Accept(s) => Some(s),
            Self::Reject => None,
        }
    }
}

// ---------------------------------------------------------------------------
// RankedUrl
// ---------------------------------------------------------------------------

/// A filtered candidate URL with its relevance score. Output order of the
/// filter stage encodes rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedUrl {
    pub url: String,
    pub score: i32,
}

// ---------------------------------------------------------------------------
// ResolveRequest
// ---------------------------------------------------------------------------

/// Input to the resolution pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// Raw learning-topic string (e.g. "1. Pointers and memory allocation").
    pub topic: String,
    /// Optional free-text subject context (e.g. "Android Mobile Programming, Kotlin").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Subject category, resolved upstream.
    pub category: SubjectCategory,
    /// URLs already recommended to this learner; skipped during validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prior_readings: Vec<String>,
}

impl ResolveRequest {
    /// Convenience constructor for the common topic+context+category case.
    pub fn new(
        topic: impl Into<String>,
        context: Option<String>,
        category: SubjectCategory,
    ) -> Self {
        Self {
            topic: topic.into(),
            context,
            category,
            prior_readings: Vec::new(),
        }
    }
}
