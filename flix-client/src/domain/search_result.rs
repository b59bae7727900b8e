//! Autocomplete search results.

use serde::Serialize;

use crate::ranking::{RelevanceFeatures, relevance};

use super::{Location, Station};

/// One city suggestion from the autocomplete endpoint.
///
/// Built fresh for every search and never mutated; the only derived
/// state is its [`relevance`](SearchResult::relevance).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub country: String,
    /// District or region, when the API provides one.
    pub district: Option<String>,
    pub location: Location,
    /// Raw match score from the API, nominally on a 0-100 scale.
    pub score: f64,
    pub legacy_id: i64,
    /// Stations in API order.
    pub stations: Vec<Station>,
    pub has_train_station: bool,
    pub is_flixbus_city: bool,
    /// Offset from UTC, in seconds.
    pub timezone_offset_seconds: i64,
}

impl SearchResult {
    /// The inputs to the relevance formula.
    pub fn features(&self) -> RelevanceFeatures {
        RelevanceFeatures {
            score: self.score,
            is_flixbus_city: self.is_flixbus_city,
            station_count: self.stations.len(),
            has_train_station: self.has_train_station,
        }
    }

    /// Composite relevance in `[0.0, 1.0]`.
    pub fn relevance(&self) -> f64 {
        relevance(&self.features())
    }

    /// Stations ordered most important first.
    ///
    /// Stable with respect to API order for equal ranks.
    pub fn stations_by_importance(&self) -> Vec<&Station> {
        let mut stations: Vec<&Station> = self.stations.iter().collect();
        stations.sort_by_key(|s| s.importance_order);
        stations
    }
}
