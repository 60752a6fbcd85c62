//! Immutable registries of trusted and untrusted domain substrings.
//!
//! Pure configuration consumed by the filter and scorer. Loaded once per
//! process and never mutated; callers receive `&Sources` so alternative
//! registries can be injected in tests.

/// Well-known technical tutorial sites.
const TUTORIAL_SITES: &[&str] = &[
    "w3schools.com",
    "geeksforgeeks.org",
    "tutorialspoint.com",
    "javatpoint.com",
    "programiz.com",
    "freecodecamp.org",
    "learn-c.org",
    "studytonight.com",
    "guru99.com",
];

/// Community blog platforms with generally solid technical writing.
const COMMUNITY_BLOGS: &[&str] = &[
    "dev.to",
    "medium.com",
    "hashnode.dev",
    "css-tricks.com",
    "digitalocean.com/community",
    "baeldung.com",
    "viblo.asia",
];

/// Vietnamese educational content sites (school subjects).
const VIETNAMESE_EDU: &[&str] = &[
    "loigiaihay.com",
    "vietjack.com",
    "hoc247.net",
    "vndoc.com",
    "tech12h.com",
    "olm.vn",
];

/// Vietnamese government and party sources.
const GOVERNMENT: &[&str] = &[
    ".gov.vn",
    "chinhphu.vn",
    "quochoi.vn",
    "dangcongsan.vn",
];

/// Major Vietnamese news outlets.
const NEWS: &[&str] = &[
    "vnexpress.net",
    "tuoitre.vn",
    "thanhnien.vn",
    "dantri.com.vn",
    "vietnamnet.vn",
];

const WIKIPEDIA: &[&str] = &["wikipedia.org"];

/// Academic hosts (universities, scholarly indexes).
const ACADEMIC: &[&str] = &[".edu.vn", ".edu/", "scholar.google", "jstor.org"];

/// Sources rejected for programming topics: Q&A forums, video platforms,
/// paper repositories, course marketplaces, and generic blog hosts whose
/// hits are rarely a coherent reading on their own.
const UNTRUSTED_FOR_PROGRAMMING: &[&str] = &[
    "stackoverflow.com",
    "stackexchange.com",
    "quora.com",
    "reddit.com",
    "youtube.com",
    "youtu.be",
    "researchgate.net",
    "academia.edu",
    "sciencedirect.com",
    "ieeexplore.ieee.org",
    "link.springer.com",
    "udemy.com",
    "coursera.org",
    "edx.org",
    "facebook.com",
    "blogspot.com",
    "wordpress.com",
];

/// Rejected for every category: downloadable documents, slide decks,
/// archives, and the sharing sites that host them.
const UNIVERSAL_BLOCKED: &[&str] = &[
    ".pdf",
    ".doc",
    ".docx",
    ".ppt",
    ".pptx",
    ".xls",
    ".xlsx",
    ".zip",
    ".rar",
    "slideshare.net",
    "scribd.com",
    "issuu.com",
    "123docz.net",
    "tailieu.vn",
];

/// Named immutable sets of domain substrings.
#[derive(Debug, Clone)]
pub struct Sources {
    pub tutorial_sites: &'static [&'static str],
    pub community_blogs: &'static [&'static str],
    pub vietnamese_edu: &'static [&'static str],
    pub government: &'static [&'static str],
    pub news: &'static [&'static str],
    pub wikipedia: &'static [&'static str],
    pub academic: &'static [&'static str],
    pub untrusted_for_programming: &'static [&'static str],
    pub universal_blocked: &'static [&'static str],
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            tutorial_sites: TUTORIAL_SITES,
            community_blogs: COMMUNITY_BLOGS,
            vietnamese_edu: VIETNAMESE_EDU,
            government: GOVERNMENT,
            news: NEWS,
            wikipedia: WIKIPEDIA,
            academic: ACADEMIC,
            untrusted_for_programming: UNTRUSTED_FOR_PROGRAMMING,
            universal_blocked: UNIVERSAL_BLOCKED,
        }
    }
}

/// Substring match of any registry entry against a lowercased URL.
pub(crate) fn any_match(list: &[&str], url_lower: &str) -> bool {
    list.iter().any(|d| url_lower.contains(d))
}
