//! In-memory fetcher with canned responses.

use std::collections::HashMap;

use async_trait::async_trait;
use correios_wsdl_refresh::{FetchError, Fetcher};
use parking_lot::Mutex;
use url::Url;

/// Fetcher answering from a table of URL to response.
///
/// URLs without a canned response get the fallback, which defaults to a
/// `404`. Every call is recorded in order.
pub struct MockFetcher {
    responses: HashMap<String, Result<String, FetchError>>,
    fallback: Result<String, FetchError>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Creates a mock answering 404 to everything.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fallback: Err(FetchError::status(404)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock answering 200 with `body` to everything.
    pub fn always_ok(body: &str) -> Self {
        Self::new().fallback(Ok(body.to_string()))
    }

    /// Creates a mock answering `status` to everything.
    pub fn always_status(status: u16) -> Self {
        Self::new().fallback(Err(FetchError::status(status)))
    }

    /// Sets the response for URLs without a canned one.
    pub fn fallback(mut self, response: Result<String, FetchError>) -> Self {
        self.fallback = response;
        self
    }

    /// Answers 200 with `body` for `url`.
    pub fn ok(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    /// Answers `error` for `url`.
    pub fn fail(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    /// Returns the URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.calls.lock().push(url.to_string());

        self.responses
            .get(url.as_str())
            .unwrap_or(&self.fallback)
            .clone()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
