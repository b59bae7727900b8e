//! The HTTP GET seam.
//!
//! Everything above this module talks to a [`Transport`], so tests can
//! substitute [`MockTransport`](super::MockTransport) for the network.

use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;

use super::error::FlixError;

/// A GET request as seen by a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP GET.
///
/// Implementations must be shareable between tasks; one transport serves
/// every call a client makes.
pub trait Transport: Send + Sync {
    /// Send the request once. Non-2xx statuses are returned, not raised.
    fn get(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, FlixError>> + Send;
}

/// Production transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FlixError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FlixError> {
        let response = self
            .http
            .get(&request.url)
            .query(&request.query)
            .headers(request.headers.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
