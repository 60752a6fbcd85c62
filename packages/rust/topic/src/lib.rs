//! Topic normalization and technology-keyword extraction.
//!
//! The first stage of the resolution pipeline: raw syllabus strings are
//! cleaned into searchable topics, assessment sessions are flagged so the
//! caller can skip them, and free-text subject context is mapped to a
//! curated set of technology tags that gate query building and scoring.

mod keywords;
mod normalize;

pub use keywords::extract_tech_keywords;
pub use normalize::{is_meta_session, normalize};
