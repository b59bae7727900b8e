//! Client configuration.

use std::time::Duration;

use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT,
};

use super::error::FlixError;
use super::retry::RetryPolicy;

/// Default base URL for the JSON API.
pub const DEFAULT_BASE_URL: &str = "https://global.api.flixbus.com";

/// Default URL of the public website (city directory).
pub const DEFAULT_WEB_URL: &str = "https://flixbus.com";

/// Browser-like user agent; the API rejects obvious bots.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36";

const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
const DEFAULT_ORIGIN: &str = "https://www.flixbus.com";
const DEFAULT_REFERER: &str = "https://www.flixbus.com/";

/// Accept header for API calls.
pub const ACCEPT_JSON: &str = "application/json";

/// Accept header for the website.
pub const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Configuration for the client.
#[derive(Debug, Clone)]
pub struct FlixConfig {
    /// Base URL for the JSON API
    pub base_url: String,
    /// Base URL for the public website
    pub web_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retry policy for API calls
    pub retry: RetryPolicy,
    pub user_agent: String,
    pub accept_language: String,
    pub origin: String,
    pub referer: String,
}

impl FlixConfig {
    /// Create a config pointing at the production endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom website URL (for testing).
    pub fn with_web_url(mut self, url: impl Into<String>) -> Self {
        self.web_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The fixed headers sent with every API call.
    pub fn headers(&self) -> Result<HeaderMap, FlixError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&self.user_agent, "user-agent")?);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        headers.insert(
            ACCEPT_LANGUAGE,
            header_value(&self.accept_language, "accept-language")?,
        );
        headers.insert(ORIGIN, header_value(&self.origin, "origin")?);
        headers.insert(REFERER, header_value(&self.referer, "referer")?);
        Ok(headers)
    }
}

impl Default for FlixConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            web_url: DEFAULT_WEB_URL.to_string(),
            timeout_secs: 30,
            retry: RetryPolicy::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }
}

fn header_value(value: &str, name: &'static str) -> Result<HeaderValue, FlixError> {
    HeaderValue::from_str(value).map_err(|_| FlixError::InvalidHeader(name))
}
