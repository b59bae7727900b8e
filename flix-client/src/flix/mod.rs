//! Client for the bus operator's public JSON API.
//!
//! Key characteristics of the API:
//! - Every endpoint is a read-only GET, so requests can be retried freely
//! - Requests without browser-like headers (user agent, origin, referer)
//!   are refused
//! - Parameters are stringly typed and endpoints disagree on boolean
//!   encoding (see [`QueryParams`])

mod client;
mod config;
mod convert;
mod error;
mod executor;
mod mock;
mod params;
mod query;
mod retry;
mod transport;
mod types;

pub use client::FlixClient;
pub use config::{ACCEPT_HTML, ACCEPT_JSON, DEFAULT_BASE_URL, DEFAULT_WEB_URL, FlixConfig};
pub use convert::{
    parse_city, parse_city_listing, parse_search_result, parse_search_results, parse_station,
};
pub use error::{FlixError, ParseError};
pub use executor::RequestExecutor;
pub use mock::MockTransport;
pub use params::QueryParams;
pub use query::{
    AnalyticsQuery, BestMatchQuery, CitiesQuery, DEFAULT_METRICS, SuggestQuery, TripSearch,
};
pub use retry::RetryPolicy;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
pub use types::{CityRecord, LocationRecord, SearchResultRecord, StationRecord};
