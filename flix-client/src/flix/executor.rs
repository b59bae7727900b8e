//! Retrying request executor.
//!
//! Wraps a [`Transport`] with the fixed headers, the retry policy and JSON
//! decoding. This is the only place transient failures are absorbed: a
//! call either returns decoded JSON or the error from its final attempt.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::error::FlixError;
use super::params::QueryParams;
use super::retry::RetryPolicy;
use super::transport::{HttpRequest, Transport};

/// Maximum number of body characters kept in error messages.
const BODY_EXCERPT_CHARS: usize = 500;

/// Executes API calls against a base URL with retries.
#[derive(Debug, Clone)]
pub struct RequestExecutor<T> {
    transport: T,
    base_url: String,
    headers: HeaderMap,
    retry: RetryPolicy,
}

impl<T: Transport> RequestExecutor<T> {
    pub fn new(
        transport: T,
        base_url: impl Into<String>,
        headers: HeaderMap,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            headers,
            retry,
        }
    }

    /// Full URL for an endpoint path.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// GET an API endpoint and decode the JSON body.
    ///
    /// Retryable failures (see [`FlixError::is_retryable`]) are retried
    /// according to the policy, sleeping between attempts. The error from
    /// the last attempt is returned once the budget is spent.
    pub async fn execute(&self, endpoint: &str, params: &QueryParams) -> Result<Value, FlixError> {
        let request = HttpRequest {
            url: self.endpoint_url(endpoint),
            query: params.pairs().to_vec(),
            headers: self.headers.clone(),
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            debug!(url = %request.url, attempt, "GET");

            let err = match self.attempt(&request).await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if err.is_retryable() && self.retry.should_retry(attempt) {
                let delay = self.retry.delay_for(attempt - 1);
                warn!(
                    url = %request.url,
                    attempt,
                    max_attempts = self.retry.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            error!(url = %request.url, attempt, error = %err, "request failed");
            return Err(err);
        }
    }

    /// GET an arbitrary page once and return its body as text.
    ///
    /// Uses the fixed headers with `Accept` replaced. Not retried.
    pub async fn fetch_text(&self, url: &str, accept: &'static str) -> Result<String, FlixError> {
        let mut headers = self.headers.clone();
        headers.insert(ACCEPT, HeaderValue::from_static(accept));

        let request = HttpRequest {
            url: url.to_string(),
            query: Vec::new(),
            headers,
        };

        debug!(url, "GET page");
        let response = self.transport.get(&request).await.inspect_err(|e| {
            error!(url, error = %e, "page request failed");
        })?;

        if !response.is_success() {
            error!(url, status = response.status, "page request returned error status");
            return Err(FlixError::Api {
                status: response.status,
                message: excerpt(&response.body),
            });
        }

        Ok(response.body)
    }

    /// One GET, status check and decode.
    async fn attempt(&self, request: &HttpRequest) -> Result<Value, FlixError> {
        let response = self.transport.get(request).await?;

        if !response.is_success() {
            return Err(FlixError::Api {
                status: response.status,
                message: excerpt(&response.body),
            });
        }

        serde_json::from_str(&response.body).map_err(|e| FlixError::Json {
            message: e.to_string(),
            body: Some(excerpt(&response.body)),
        })
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flix::MockTransport;
    use serde_json::json;
    use std::time::Duration;

    fn executor(mock: &MockTransport, retry: RetryPolicy) -> RequestExecutor<MockTransport> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        RequestExecutor::new(mock.clone(), "http://api.test/", headers, retry)
    }

    #[test]
    fn endpoint_url_joins_slashes() {
        let exec = executor(&MockTransport::new(), RetryPolicy::none());
        assert_eq!(exec.endpoint_url("cms/cities"), "http://api.test/cms/cities");
        assert_eq!(exec.endpoint_url("/cms/cities"), "http://api.test/cms/cities");
    }

    #[tokio::test]
    async fn success_first_try() {
        let mock = MockTransport::new().respond_json(&json!({"result": [], "count": 0}));
        let exec = executor(&mock, RetryPolicy::default());

        let params = QueryParams::new().text("language", "en");
        let value = exec.execute("cms/cities", &params).await.unwrap();

        assert_eq!(value["count"], 0);
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/cms/cities");
        assert_eq!(requests[0].query, vec![("language".to_string(), "en".to_string())]);
        assert_eq!(requests[0].headers[ACCEPT], "application/json");
    }

    #[tokio::test(start_paused = true)]
    async fn two_failures_then_success_waits_twice() {
        let mock = MockTransport::new()
            .fail("connection refused")
            .respond(503, "Service Unavailable")
            .respond_json(&json!([]));
        let exec = executor(&mock, RetryPolicy::default());

        let start = tokio::time::Instant::now();
        let value = exec.execute("search/autocomplete/cities", &QueryParams::new()).await;

        assert_eq!(value.unwrap(), json!([]));
        assert_eq!(mock.request_count(), 3);
        // Two backoff waits of 4s each
        assert_eq!(start.elapsed(), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_three_attempts() {
        let mock = MockTransport::new()
            .fail("timeout")
            .fail("timeout")
            .fail("timeout")
            .respond_json(&json!([]));
        let exec = executor(&mock, RetryPolicy::default());

        let start = tokio::time::Instant::now();
        let result = exec.execute("cms/cities", &QueryParams::new()).await;

        assert!(matches!(result, Err(FlixError::Transport(ref m)) if m == "timeout"));
        assert_eq!(mock.request_count(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_json_is_retried() {
        let mock = MockTransport::new()
            .respond(200, "<html>maintenance</html>")
            .respond_json(&json!({"ok": true}));
        let exec = executor(&mock, RetryPolicy::default());

        let value = exec.execute("cms/cities", &QueryParams::new()).await.unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn final_decode_error_is_surfaced() {
        let mock = MockTransport::new()
            .respond(200, "not json")
            .respond(200, "still not json");
        let exec = executor(
            &mock,
            RetryPolicy {
                max_attempts: 2,
                ..RetryPolicy::immediate()
            },
        );

        match exec.execute("cms/cities", &QueryParams::new()).await {
            Err(FlixError::Json { body, .. }) => assert_eq!(body.as_deref(), Some("still not json")),
            other => panic!("expected JSON error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_status_carries_excerpt() {
        let long_body = "x".repeat(2000);
        let mock = MockTransport::new().respond(500, long_body);
        let exec = executor(&mock, RetryPolicy::none());

        match exec.execute("cms/cities", &QueryParams::new()).await {
            Err(FlixError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message.len(), BODY_EXCERPT_CHARS);
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_text_overrides_accept_and_does_not_retry() {
        let mock = MockTransport::new()
            .respond(502, "Bad Gateway")
            .respond(200, "<html></html>");
        let exec = executor(&mock, RetryPolicy::immediate());

        let result = exec.fetch_text("http://web.test/bus", "text/html").await;
        assert!(matches!(result, Err(FlixError::Api { status: 502, .. })));
        assert_eq!(mock.request_count(), 1);

        let body = exec.fetch_text("http://web.test/bus", "text/html").await.unwrap();
        assert_eq!(body, "<html></html>");

        let requests = mock.requests();
        assert_eq!(requests[1].headers[ACCEPT], "text/html");
        assert!(requests[1].query.is_empty());
    }
}
