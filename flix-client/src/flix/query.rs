//! Typed request parameters for each endpoint.
//!
//! Every query has the API's defaults built in and setters for the
//! optional inputs. `to_params` is a pure function so the exact wire
//! encoding can be tested without a network.

use chrono::NaiveDate;
use serde_json::json;

use super::params::QueryParams;

/// Metrics requested from the analytics endpoint when none are given.
pub const DEFAULT_METRICS: [&str; 7] = [
    "search_volume",
    "conversion_rate",
    "average_price",
    "occupancy_rate",
    "cancellation_rate",
    "mobile_searches",
    "desktop_searches",
];

/// Parameters for the city listing endpoints.
///
/// The two listing endpoints use different defaults; see
/// [`CitiesQuery::default`] and [`CitiesQuery::reachable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitiesQuery {
    pub language: String,
    pub country: String,
    pub limit: u32,
}

impl Default for CitiesQuery {
    /// Defaults for `cms/cities`: English, every country, up to 6000.
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: String::new(),
            limit: 6000,
        }
    }
}

impl CitiesQuery {
    /// Defaults for `cms/cities/{uuid}/reachable`: English, NL, 5 results.
    pub fn reachable() -> Self {
        Self {
            language: "en".to_string(),
            country: "NL".to_string(),
            limit: 5,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .text("language", &self.language)
            .text("country", &self.country)
            .int("limit", i64::from(self.limit))
    }
}

/// Parameters for a trip search between two cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSearch {
    pub from_city_id: String,
    pub to_city_id: String,
    pub departure_date: NaiveDate,
    pub adults: u32,
    pub currency: String,
    pub locale: String,
    pub include_after_midnight: bool,
    pub disable_distribusion: bool,
    pub disable_global_trips: bool,
}

impl TripSearch {
    /// A search for one adult, in EUR, with default trip filters.
    pub fn new(
        from_city_id: impl Into<String>,
        to_city_id: impl Into<String>,
        departure_date: NaiveDate,
    ) -> Self {
        Self {
            from_city_id: from_city_id.into(),
            to_city_id: to_city_id.into(),
            departure_date,
            adults: 1,
            currency: "EUR".to_string(),
            locale: "en".to_string(),
            include_after_midnight: true,
            disable_distribusion: false,
            disable_global_trips: false,
        }
    }

    pub fn adults(mut self, adults: u32) -> Self {
        self.adults = adults;
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn include_after_midnight(mut self, include: bool) -> Self {
        self.include_after_midnight = include;
        self
    }

    pub fn disable_distribusion(mut self, disable: bool) -> Self {
        self.disable_distribusion = disable;
        self
    }

    pub fn disable_global_trips(mut self, disable: bool) -> Self {
        self.disable_global_trips = disable;
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .text("from_city_id", &self.from_city_id)
            .text("to_city_id", &self.to_city_id)
            .text(
                "departure_date",
                self.departure_date.format("%d.%m.%Y").to_string(),
            )
            .json("products", &json!({ "adult": self.adults }))
            .text("currency", &self.currency)
            .text("locale", &self.locale)
            .text("search_by", "cities")
            .flag("include_after_midnight_rides", self.include_after_midnight)
            .flag("disable_distribusion_trips", self.disable_distribusion)
            .flag("disable_global_trips", self.disable_global_trips)
    }
}

/// Parameters for route search analytics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsQuery {
    pub from_city_id: String,
    pub to_city_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// One of `hourly`, `daily`, `weekly`, `monthly`. Passed through as is.
    pub granularity: String,
    pub metrics: Vec<String>,
    pub currency: String,
    pub locale: String,
}

impl AnalyticsQuery {
    /// Daily analytics over [`DEFAULT_METRICS`], in EUR.
    pub fn new(
        from_city_id: impl Into<String>,
        to_city_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            from_city_id: from_city_id.into(),
            to_city_id: to_city_id.into(),
            start_date,
            end_date,
            granularity: "daily".to_string(),
            metrics: DEFAULT_METRICS.iter().map(|m| m.to_string()).collect(),
            currency: "EUR".to_string(),
            locale: "en".to_string(),
        }
    }

    pub fn granularity(mut self, granularity: impl Into<String>) -> Self {
        self.granularity = granularity.into();
        self
    }

    /// Replace the metric set.
    pub fn metrics<S: Into<String>>(mut self, metrics: impl IntoIterator<Item = S>) -> Self {
        self.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .text("from_city_id", &self.from_city_id)
            .text("to_city_id", &self.to_city_id)
            .text("start_date", self.start_date.format("%Y-%m-%d").to_string())
            .text("end_date", self.end_date.format("%Y-%m-%d").to_string())
            .text("granularity", &self.granularity)
            .joined("metrics", &self.metrics)
            .text("currency", &self.currency)
            .text("locale", &self.locale)
    }
}

/// Parameters for city autocomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestQuery {
    pub query: String,
    pub language: String,
    pub country: String,
    pub flixbus_cities_only: bool,
    pub include_stations: bool,
    pub include_popular_stations: bool,
}

impl SuggestQuery {
    /// Autocomplete in English, biased towards NL, with stations.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: "en".to_string(),
            country: "nl".to_string(),
            flixbus_cities_only: false,
            include_stations: true,
            include_popular_stations: true,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn flixbus_cities_only(mut self, only: bool) -> Self {
        self.flixbus_cities_only = only;
        self
    }

    pub fn include_stations(mut self, include: bool) -> Self {
        self.include_stations = include;
        self
    }

    pub fn include_popular_stations(mut self, include: bool) -> Self {
        self.include_popular_stations = include;
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .text("q", &self.query)
            .text("lang", &self.language)
            .text("country", &self.country)
            .bool_lower("flixbus_cities_only", self.flixbus_cities_only)
            .bool_lower("stations", self.include_stations)
            .bool_lower("popular_stations", self.include_popular_stations)
    }
}

/// Parameters for best-match lookup.
///
/// Uses a German country bias by default, unlike [`SuggestQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMatchQuery {
    pub query: String,
    pub language: String,
    pub country: String,
}

impl BestMatchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: "en".to_string(),
            country: "de".to_string(),
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

impl From<BestMatchQuery> for SuggestQuery {
    fn from(q: BestMatchQuery) -> Self {
        SuggestQuery::new(q.query)
            .language(q.language)
            .country(q.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cities_defaults() {
        let params = CitiesQuery::default().to_params();
        assert_eq!(params.get("language"), Some("en"));
        assert_eq!(params.get("country"), Some(""));
        assert_eq!(params.get("limit"), Some("6000"));
    }

    #[test]
    fn reachable_defaults() {
        let params = CitiesQuery::reachable().to_params();
        assert_eq!(params.get("language"), Some("en"));
        assert_eq!(params.get("country"), Some("NL"));
        assert_eq!(params.get("limit"), Some("5"));
    }

    #[test]
    fn cities_builder() {
        let params = CitiesQuery::default()
            .language("nl")
            .country("NL")
            .limit(5)
            .to_params();
        assert_eq!(params.get("language"), Some("nl"));
        assert_eq!(params.get("country"), Some("NL"));
        assert_eq!(params.get("limit"), Some("5"));
    }

    #[test]
    fn trip_search_params() {
        let params = TripSearch::new(
            "40dde3b8-8646-11e6-9066-549f350fcb0c",
            "40dee83e-8646-11e6-9066-549f350fcb0c",
            date(2024, 10, 29),
        )
        .locale("nl")
        .to_params();

        assert_eq!(
            params.get("from_city_id"),
            Some("40dde3b8-8646-11e6-9066-549f350fcb0c")
        );
        assert_eq!(
            params.get("to_city_id"),
            Some("40dee83e-8646-11e6-9066-549f350fcb0c")
        );
        assert_eq!(params.get("departure_date"), Some("29.10.2024"));
        assert_eq!(params.get("products"), Some(r#"{"adult": 1}"#));
        assert_eq!(params.get("currency"), Some("EUR"));
        assert_eq!(params.get("locale"), Some("nl"));
        assert_eq!(params.get("search_by"), Some("cities"));
        assert_eq!(params.get("include_after_midnight_rides"), Some("1"));
        assert_eq!(params.get("disable_distribusion_trips"), Some("0"));
        assert_eq!(params.get("disable_global_trips"), Some("0"));
    }

    #[test]
    fn trip_search_flags_and_passengers() {
        let params = TripSearch::new("a", "b", date(2025, 1, 5))
            .adults(3)
            .currency("CZK")
            .include_after_midnight(false)
            .disable_distribusion(true)
            .disable_global_trips(true)
            .to_params();

        assert_eq!(params.get("departure_date"), Some("05.01.2025"));
        assert_eq!(params.get("products"), Some(r#"{"adult": 3}"#));
        assert_eq!(params.get("currency"), Some("CZK"));
        assert_eq!(params.get("include_after_midnight_rides"), Some("0"));
        assert_eq!(params.get("disable_distribusion_trips"), Some("1"));
        assert_eq!(params.get("disable_global_trips"), Some("1"));
    }

    #[test]
    fn analytics_defaults() {
        let params = AnalyticsQuery::new("a", "b", date(2024, 1, 1), date(2024, 12, 31)).to_params();

        assert_eq!(params.get("start_date"), Some("2024-01-01"));
        assert_eq!(params.get("end_date"), Some("2024-12-31"));
        assert_eq!(params.get("granularity"), Some("daily"));
        assert_eq!(
            params.get("metrics"),
            Some(
                "search_volume,conversion_rate,average_price,occupancy_rate,\
                 cancellation_rate,mobile_searches,desktop_searches"
            )
        );
        assert_eq!(params.get("currency"), Some("EUR"));
        assert_eq!(params.get("locale"), Some("en"));
    }

    #[test]
    fn analytics_custom_metrics_and_granularity() {
        let params = AnalyticsQuery::new("a", "b", date(2024, 1, 1), date(2024, 1, 31))
            .granularity("fortnightly")
            .metrics(["search_volume", "conversion_rate", "average_price"])
            .to_params();

        // Granularity is not validated
        assert_eq!(params.get("granularity"), Some("fortnightly"));
        assert_eq!(
            params.get("metrics"),
            Some("search_volume,conversion_rate,average_price")
        );
    }

    #[test]
    fn suggest_params_are_lowercase_booleans() {
        let params = SuggestQuery::new("Karlsruhe").to_params();

        assert_eq!(params.get("q"), Some("Karlsruhe"));
        assert_eq!(params.get("lang"), Some("en"));
        assert_eq!(params.get("country"), Some("nl"));
        assert_eq!(params.get("flixbus_cities_only"), Some("false"));
        assert_eq!(params.get("stations"), Some("true"));
        assert_eq!(params.get("popular_stations"), Some("true"));

        let params = SuggestQuery::new("Karlsruhe")
            .flixbus_cities_only(true)
            .include_stations(false)
            .include_popular_stations(false)
            .to_params();
        assert_eq!(params.get("flixbus_cities_only"), Some("true"));
        assert_eq!(params.get("stations"), Some("false"));
        assert_eq!(params.get("popular_stations"), Some("false"));
    }

    #[test]
    fn best_match_converts_with_german_bias() {
        let suggest: SuggestQuery = BestMatchQuery::new("Berlin").into();
        assert_eq!(suggest.query, "Berlin");
        assert_eq!(suggest.language, "en");
        assert_eq!(suggest.country, "de");
        assert!(suggest.include_stations);

        let suggest: SuggestQuery = BestMatchQuery::new("Berlin")
            .language("nl")
            .country("nl")
            .into();
        assert_eq!(suggest.language, "nl");
        assert_eq!(suggest.country, "nl");
    }
}
