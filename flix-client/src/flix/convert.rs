//! Conversion from raw JSON to domain types.
//!
//! Each entity has an explicit table of required fields. Presence is
//! checked first so a missing field is reported by name; types are then
//! checked by deserializing into the DTOs in [`types`](super::types).

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{City, Location, SearchResult, Station};

use super::error::ParseError;
use super::types::{CityRecord, LocationRecord, SearchResultRecord, StationRecord};

const LOCATION_FIELDS: &[&str] = &["lat", "lon"];

const CITY_FIELDS: &[&str] = &[
    "id",
    "uuid",
    "name",
    "country",
    "language",
    "location",
    "slug",
    "search_volume",
    "transportation_category",
];

const STATION_FIELDS: &[&str] = &["id", "name", "legacy_id", "importance_order", "is_train"];

/// Required fields of an autocomplete result. `district` and `stations`
/// are optional.
const SEARCH_RESULT_FIELDS: &[&str] = &[
    "id",
    "name",
    "country",
    "location",
    "score",
    "legacy_id",
    "has_train_station",
    "is_flixbus_city",
    "timezone_offset_seconds",
];

/// Parse one city record.
pub fn parse_city(value: &Value) -> Result<City, ParseError> {
    let obj = require_fields("city", value, CITY_FIELDS)?;
    check_location("city", obj)?;
    let record: CityRecord = deserialize("city", value)?;

    Ok(City {
        id: record.id,
        uuid: record.uuid,
        name: record.name,
        country: record.country,
        language: record.language,
        location: convert_location(&record.location),
        slug: record.slug,
        search_volume: record.search_volume,
        transportation_category: record.transportation_category,
    })
}

/// Parse every record in the `result` array of a city listing.
pub fn parse_city_listing(value: &Value) -> Result<Vec<City>, ParseError> {
    let obj = value.as_object().ok_or_else(|| {
        log_parse_error(ParseError::NotAnObject {
            entity: "city listing",
        })
    })?;

    let records = obj.get("result").ok_or_else(|| {
        log_parse_error(ParseError::MissingField {
            entity: "city listing",
            field: "result",
        })
    })?;

    let records = records.as_array().ok_or_else(|| {
        log_parse_error(ParseError::UnexpectedShape {
            what: "city listing result",
            expected: "array",
        })
    })?;

    records.iter().map(parse_city).collect()
}

/// Parse one station record.
pub fn parse_station(value: &Value) -> Result<Station, ParseError> {
    require_fields("station", value, STATION_FIELDS)?;
    let record: StationRecord = deserialize("station", value)?;
    Ok(convert_station(record))
}

/// Parse one autocomplete result, including its stations.
pub fn parse_search_result(value: &Value) -> Result<SearchResult, ParseError> {
    let obj = require_fields("search result", value, SEARCH_RESULT_FIELDS)?;
    check_location("search result", obj)?;

    if let Some(Value::Array(stations)) = obj.get("stations") {
        for station in stations {
            require_fields("station", station, STATION_FIELDS)?;
        }
    }

    let record: SearchResultRecord = deserialize("search result", value)?;

    Ok(SearchResult {
        id: record.id,
        name: record.name,
        country: record.country,
        district: record.district,
        location: convert_location(&record.location),
        score: record.score,
        legacy_id: record.legacy_id,
        stations: record
            .stations
            .unwrap_or_default()
            .into_iter()
            .map(convert_station)
            .collect(),
        has_train_station: record.has_train_station,
        is_flixbus_city: record.is_flixbus_city,
        timezone_offset_seconds: record.timezone_offset_seconds,
    })
}

/// Parse an autocomplete response, which must be a JSON array.
pub fn parse_search_results(value: &Value) -> Result<Vec<SearchResult>, ParseError> {
    let items = value.as_array().ok_or_else(|| {
        log_parse_error(ParseError::UnexpectedShape {
            what: "autocomplete response",
            expected: "array",
        })
    })?;

    items.iter().map(parse_search_result).collect()
}

fn convert_location(record: &LocationRecord) -> Location {
    Location::new(record.lat, record.lon)
}

fn convert_station(record: StationRecord) -> Station {
    Station {
        id: record.id,
        name: record.name,
        legacy_id: record.legacy_id,
        importance_order: record.importance_order,
        is_train: record.is_train,
    }
}

/// Check the nested `location` object of an already validated record.
fn check_location(entity: &'static str, obj: &Map<String, Value>) -> Result<(), ParseError> {
    match obj.get("location") {
        Some(location) => require_fields("location", location, LOCATION_FIELDS).map(|_| ()),
        None => Err(log_parse_error(ParseError::MissingField {
            entity,
            field: "location",
        })),
    }
}

/// Ensure `value` is an object containing every field in `fields`.
fn require_fields<'a>(
    entity: &'static str,
    value: &'a Value,
    fields: &[&'static str],
) -> Result<&'a Map<String, Value>, ParseError> {
    let obj = value
        .as_object()
        .ok_or_else(|| log_parse_error(ParseError::NotAnObject { entity }))?;

    for &field in fields {
        if !obj.contains_key(field) {
            return Err(log_parse_error(ParseError::MissingField { entity, field }));
        }
    }

    Ok(obj)
}

fn deserialize<T: DeserializeOwned>(entity: &'static str, value: &Value) -> Result<T, ParseError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        log_parse_error(ParseError::InvalidField {
            entity,
            message: e.to_string(),
        })
    })
}

fn log_parse_error(err: ParseError) -> ParseError {
    warn!(error = %err, "failed to parse API record");
    err
}
