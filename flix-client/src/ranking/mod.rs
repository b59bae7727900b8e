//! Relevance ranking for autocomplete results.
//!
//! The API returns its own match score; we blend it with a few
//! service-level signals (is the city served, how many stations, is there
//! a train station) and order suggestions by the result.

mod rank;
mod relevance;

pub use rank::{best_match, rank_results};
pub use relevance::{RelevanceFeatures, relevance};
