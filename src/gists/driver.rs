//! Pagination driver
//!
//! Walks pages 1, 2, 3, ... strictly in order, one request at a time,
//! until a page comes back without a `next` link. The first error ends
//! the run and nothing collected so far is returned.

use super::credential::Credential;
use super::fetcher::PageFetcher;
use super::observer::{FetchObserver, NoopObserver};
use crate::config::FetchConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, Transport};
use crate::pagination::PaginationState;
use crate::types::Gist;
use std::sync::Arc;
use tracing::debug;

/// Fetches every gist of the token's owner
///
/// Holds no per-call state, so one instance can serve concurrent calls.
pub struct GistFetcher<T = HttpClient> {
    fetcher: PageFetcher<T>,
    observer: Arc<dyn FetchObserver>,
}

impl GistFetcher<HttpClient> {
    /// Create a fetcher backed by reqwest
    pub fn from_config(config: FetchConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(HttpClientConfig::from(&config))?;
        Ok(Self::new(client, config))
    }
}

impl<T: Transport> GistFetcher<T> {
    /// Create a fetcher over any transport
    pub fn new(transport: T, config: FetchConfig) -> Self {
        Self {
            fetcher: PageFetcher::new(transport, config),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Set the progress observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Fetch all gists, following pagination to the end
    pub async fn fetch_all(&self, token: &str) -> Result<Vec<Gist>> {
        let credential = Credential::new(token)?;
        self.fetch_all_with(&credential).await
    }

    /// Same as [`fetch_all`](Self::fetch_all) with an already validated credential
    pub async fn fetch_all_with(&self, credential: &Credential) -> Result<Vec<Gist>> {
        let mut state = PaginationState::new();
        let mut gists = Vec::new();

        while !state.done {
            let page = state.page;
            self.observer.on_page_request(page);

            let result = match self.fetcher.fetch_page(page, credential).await {
                Ok(result) => result,
                Err(e) => {
                    self.observer.on_error(page, &e);
                    return Err(e);
                }
            };

            state.advance(&result);
            self.observer.on_page_fetched(page, &result, gists.len() + result.len());
            debug!(
                "Page {page}: {} gists, more to get: {}",
                result.len(),
                result.has_next
            );

            gists.extend(result.records);
        }

        debug!(
            "Fetched {} gists over {} pages",
            state.total_fetched, state.pages_fetched
        );
        Ok(gists)
    }
}

impl<T> std::fmt::Debug for GistFetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GistFetcher")
            .field("config", &self.fetcher.config())
            .finish_non_exhaustive()
    }
}
