//! API record DTOs.
//!
//! These map directly onto the JSON records. Field presence is checked
//! against the tables in [`convert`](super::convert) before deserializing,
//! so every non-`Option` field here is one the API must send.

use serde::Deserialize;

/// `{"lat": .., "lon": ..}`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    pub lat: f64,
    pub lon: f64,
}

/// One entry of a `cms/cities` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub country: String,
    pub language: String,
    pub location: LocationRecord,
    pub slug: String,
    pub search_volume: i64,
    pub transportation_category: Vec<String>,
}

/// A station nested in an autocomplete result.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub legacy_id: i64,
    pub importance_order: i64,
    pub is_train: bool,
}

/// One entry of a `search/autocomplete/cities` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultRecord {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Omitted or `null` for cities without a district.
    #[serde(default)]
    pub district: Option<String>,
    pub location: LocationRecord,
    pub score: f64,
    pub legacy_id: i64,
    /// Omitted when the request did not ask for stations.
    #[serde(default)]
    pub stations: Option<Vec<StationRecord>>,
    pub has_train_station: bool,
    pub is_flixbus_city: bool,
    pub timezone_offset_seconds: i64,
}
