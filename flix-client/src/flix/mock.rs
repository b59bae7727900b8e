//! Scripted transport for testing without network access.
//!
//! Responses are served in the order they were queued and every request
//! is recorded so tests can inspect URLs, parameters and headers.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::FlixError;
use super::transport::{HttpRequest, HttpResponse, Transport};

/// One queued outcome.
#[derive(Debug, Clone)]
enum Scripted {
    Respond(HttpResponse),
    Fail(String),
}

/// Mock transport that replays a fixed script.
///
/// Cloning shares the script and the request log, so a test can hand one
/// clone to a client and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Scripted::Respond(HttpResponse::new(status, body)))
    }

    /// Queue a 200 response carrying `value` as JSON.
    pub fn respond_json(self, value: &serde_json::Value) -> Self {
        self.respond(200, value.to_string())
    }

    /// Queue a connection-level failure.
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Scripted::Fail(message.into()))
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    fn push(self, entry: Scripted) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(entry);
        }
        self
    }

    fn next(&self, request: &HttpRequest) -> Option<Scripted> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.script.lock().ok().and_then(|mut s| s.pop_front())
    }
}

impl Transport for MockTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FlixError> {
        match self.next(request) {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(FlixError::Transport(message)),
            None => Err(FlixError::Transport(format!(
                "no scripted response for {}",
                request.url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;

    fn request(url: &str) -> HttpRequest {
        HttpRequest {
            url: url.to_string(),
            query: vec![("q".to_string(), "Berlin".to_string())],
            headers: HeaderMap::new(),
        }
    }

    #[tokio::test]
    async fn replays_in_order() {
        let mock = MockTransport::new()
            .fail("connection reset")
            .respond(200, "[]");

        let first = mock.get(&request("http://test/a")).await;
        assert!(matches!(first, Err(FlixError::Transport(_))));

        let second = mock.get(&request("http://test/b")).await.unwrap();
        assert_eq!(second, HttpResponse::ok("[]"));

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "http://test/a");
        assert_eq!(requests[1].url, "http://test/b");
    }

    #[tokio::test]
    async fn exhausted_script_fails() {
        let mock = MockTransport::new();
        let result = mock.get(&request("http://test/empty")).await;

        match result {
            Err(FlixError::Transport(message)) => assert!(message.contains("http://test/empty")),
            other => panic!("expected transport error, got {other:?}"),
        }
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let mock = MockTransport::new().respond(200, "{}");
        let handle = mock.clone();

        mock.get(&request("http://test/")).await.unwrap();
        assert_eq!(handle.request_count(), 1);
    }
}
