//! Entity model for the bus operator's API.
//!
//! Plain value types produced by the parsers in [`crate::flix`]. None of
//! them change after construction, so they can be shared freely between
//! tasks.

mod city;
mod location;
mod search_result;
mod station;

pub use city::{City, ScrapedCity};
pub use location::Location;
pub use search_result::SearchResult;
pub use station::Station;
