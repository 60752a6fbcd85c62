//! Orchestration of the reading-URL resolution pipeline.
//!
//! Wires the stage crates together: normalize the topic, extract technology
//! keywords from context, try the official-documentation short-circuit,
//! otherwise search, filter-and-rank, and validate candidates until one is
//! live. Search itself is behind the [`SearchProvider`] trait so callers
//! decide where raw results come from.

mod pipeline;

pub use pipeline::{ReadingResolver, SearchProvider};
