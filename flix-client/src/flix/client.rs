//! High-level client for the bus operator's API and website.
//!
//! Each operation builds its query, runs it through the
//! [`RequestExecutor`], and (where the result is typed) parses the JSON
//! into domain types.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, info};

use crate::directory::{self, DirectorySource, WebDirectory};
use crate::domain::{City, ScrapedCity, SearchResult};
use crate::ranking::rank_results;

use super::config::FlixConfig;
use super::convert::{parse_city_listing, parse_search_results};
use super::error::FlixError;
use super::executor::RequestExecutor;
use super::query::{AnalyticsQuery, BestMatchQuery, CitiesQuery, SuggestQuery, TripSearch};
use super::transport::{HttpTransport, Transport};

const CITIES_ENDPOINT: &str = "cms/cities";
const TRIP_SEARCH_ENDPOINT: &str = "search/service/v4/search";
const ANALYTICS_ENDPOINT: &str = "search/service/v4/analytics";
const AUTOCOMPLETE_ENDPOINT: &str = "search/autocomplete/cities";

/// Client for the bus operator's public API.
///
/// Holds no per-call state, so one client can serve concurrent tasks.
#[derive(Debug, Clone)]
pub struct FlixClient<T = HttpTransport> {
    executor: RequestExecutor<T>,
    web_url: String,
}

impl FlixClient<HttpTransport> {
    /// Create a client that talks to the network.
    pub fn new(config: FlixConfig) -> Result<Self, FlixError> {
        let transport = HttpTransport::new(config.timeout())?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> FlixClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: FlixConfig, transport: T) -> Result<Self, FlixError> {
        let headers = config.headers()?;
        let executor = RequestExecutor::new(transport, config.base_url, headers, config.retry);

        Ok(Self {
            executor,
            web_url: config.web_url,
        })
    }

    /// The request executor, for calling endpoints without a typed wrapper.
    pub fn executor(&self) -> &RequestExecutor<T> {
        &self.executor
    }

    /// List cities where the operator runs services.
    ///
    /// Returns the raw listing (`result` array and `count`).
    pub async fn get_cities(&self, query: &CitiesQuery) -> Result<Value, FlixError> {
        self.executor
            .execute(CITIES_ENDPOINT, &query.to_params())
            .await
    }

    /// List cities and parse every record.
    pub async fn list_cities(&self, query: &CitiesQuery) -> Result<Vec<City>, FlixError> {
        let listing = self.get_cities(query).await?;
        let cities = parse_city_listing(&listing)?;
        debug!(count = cities.len(), "parsed city listing");
        Ok(cities)
    }

    /// Cities reachable from the city with the given UUID.
    ///
    /// Use [`CitiesQuery::reachable`] for this endpoint's defaults.
    pub async fn get_reachable_cities(
        &self,
        city_uuid: &str,
        query: &CitiesQuery,
    ) -> Result<Value, FlixError> {
        let endpoint = format!("{CITIES_ENDPOINT}/{city_uuid}/reachable");
        self.executor.execute(&endpoint, &query.to_params()).await
    }

    /// Reachable cities, parsed.
    pub async fn list_reachable_cities(
        &self,
        city_uuid: &str,
        query: &CitiesQuery,
    ) -> Result<Vec<City>, FlixError> {
        let listing = self.get_reachable_cities(city_uuid, query).await?;
        Ok(parse_city_listing(&listing)?)
    }

    /// Search for trips between two cities on a date.
    pub async fn search_trips(&self, search: &TripSearch) -> Result<Value, FlixError> {
        self.executor
            .execute(TRIP_SEARCH_ENDPOINT, &search.to_params())
            .await
    }

    /// Search analytics for a route over a date range.
    pub async fn get_search_analytics(&self, query: &AnalyticsQuery) -> Result<Value, FlixError> {
        self.executor
            .execute(ANALYTICS_ENDPOINT, &query.to_params())
            .await
    }

    /// Autocomplete a city name, most relevant suggestion first.
    pub async fn suggest_city(&self, query: &SuggestQuery) -> Result<Vec<SearchResult>, FlixError> {
        let response = self
            .executor
            .execute(AUTOCOMPLETE_ENDPOINT, &query.to_params())
            .await?;

        let results = parse_search_results(&response)?;
        debug!(query = %query.query, count = results.len(), "ranking suggestions");
        Ok(rank_results(results))
    }

    /// The single most relevant suggestion, or `None` when nothing matches.
    pub async fn get_best_match(
        &self,
        query: BestMatchQuery,
    ) -> Result<Option<SearchResult>, FlixError> {
        let results = self.suggest_city(&query.into()).await?;
        Ok(results.into_iter().next())
    }

    /// The live city directory.
    pub fn directory(&self) -> WebDirectory<'_, T> {
        WebDirectory::new(&self.executor, &self.web_url)
    }

    /// Every city in the directory, in page order.
    pub async fn scrape_all_cities(&self) -> Result<Vec<ScrapedCity>, FlixError> {
        let sections = self.directory().sections().await?;
        let cities = directory::flatten(sections);
        info!(count = cities.len(), "scraped city directory");
        Ok(cities)
    }

    /// Directory cities listed under `letter` (case-insensitive).
    pub async fn get_cities_by_letter(&self, letter: &str) -> Result<Vec<ScrapedCity>, FlixError> {
        let cities = self.scrape_all_cities().await?;
        Ok(directory::cities_by_letter(&cities, letter))
    }

    /// The letters under which the directory lists at least one city.
    pub async fn get_unique_city_letters(&self) -> Result<BTreeSet<String>, FlixError> {
        let cities = self.scrape_all_cities().await?;
        Ok(directory::unique_letters(&cities))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
