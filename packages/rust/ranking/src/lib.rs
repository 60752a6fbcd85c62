//! Search-result parsing, trust registries, relevance scoring, and
//! filtering for the reading-URL resolution pipeline.
//!
//! Given raw "Title:/Link:/Snippet:" text blocks from the search
//! collaborator, this crate parses out candidate URLs, drops untrusted and
//! wrong-technology sources, scores the survivors against topic/keywords/
//! category, and returns them ranked.

mod filter;
mod parser;
mod score;
mod sources;

pub use filter::{filter_and_rank, is_untrusted, is_wrong_framework};
pub use parser::{hit_snippet, hit_title, hit_url, split_blocks};
pub use score::relevance;
pub use sources::Sources;
