//! City records from the city listing endpoints.

use serde::Serialize;

use super::Location;

/// A city served by the operator, as returned by `cms/cities`.
///
/// Cities are built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    /// Numeric city identifier.
    pub id: i64,
    /// UUID used by the search and reachability endpoints.
    pub uuid: String,
    /// Display name in the requested language.
    pub name: String,
    /// ISO country code.
    pub country: String,
    /// Language code of `name`.
    pub language: String,
    pub location: Location,
    /// URL slug on the public website.
    pub slug: String,
    /// Relative search popularity.
    pub search_volume: i64,
    /// Transportation category tags (e.g. `"bus"`, `"train"`).
    pub transportation_category: Vec<String>,
}

/// A city entry scraped from the public city directory page.
///
/// Directory entries carry no identifier shared with [`City`], so the two
/// cannot be joined reliably.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScrapedCity {
    pub name: String,
    pub slug: String,
    /// Directory section heading the entry was listed under (e.g. `"A"`).
    pub letter: String,
}
