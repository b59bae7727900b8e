//! Where directory sections come from.

use std::future::Future;

use crate::flix::{ACCEPT_HTML, FlixError, RequestExecutor, Transport};

use super::DirectorySection;
use super::scrape::parse_directory;

/// Path of the directory page on the website.
const DIRECTORY_PATH: &str = "bus";

/// Supplies the letter sections of the city directory.
pub trait DirectorySource: Send + Sync {
    fn sections(&self) -> impl Future<Output = Result<Vec<DirectorySection>, FlixError>> + Send;
}

/// Scrapes the live directory page.
///
/// Fetched once per call, without retries.
pub struct WebDirectory<'a, T> {
    executor: &'a RequestExecutor<T>,
    page_url: String,
}

impl<'a, T: Transport> WebDirectory<'a, T> {
    pub fn new(executor: &'a RequestExecutor<T>, web_url: &str) -> Self {
        Self {
            executor,
            page_url: format!("{}/{}", web_url.trim_end_matches('/'), DIRECTORY_PATH),
        }
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }
}

impl<T: Transport> DirectorySource for WebDirectory<'_, T> {
    async fn sections(&self) -> Result<Vec<DirectorySection>, FlixError> {
        let html = self.executor.fetch_text(&self.page_url, ACCEPT_HTML).await?;
        Ok(parse_directory(&html)?)
    }
}
