//! Client for a long-distance bus operator's public API and website.
//!
//! Provides city lookup, reachability queries, trip search, route
//! analytics, a scraped city directory, and city autocomplete ranked by
//! a composite relevance score.

pub mod directory;
pub mod domain;
pub mod flix;
pub mod ranking;
