//! Page fetcher
//!
//! Issues exactly one GET per call and turns the answer into either a
//! [`PageResult`] or a classified [`Error`]. Classification order:
//!
//! 1. transport failure
//! 2. 401 / 403
//! 3. any other status that is not 200
//! 4. 200, body decoded as a JSON array

use super::credential::Credential;
use super::request::build_page_request;
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::http::{RawResponse, Transport};
use crate::pagination::{self, PageResult};
use crate::types::Gist;
use serde::Deserialize;
use tracing::{debug, warn};

/// Error body GitHub sends with 401 and 403 responses
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    documentation_url: String,
}

/// Fetches single pages of gists over a [`Transport`]
#[derive(Debug, Clone)]
pub struct PageFetcher<T> {
    transport: T,
    config: FetchConfig,
}

impl<T> PageFetcher<T> {
    /// The configuration requests are built from
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

impl<T: Transport> PageFetcher<T> {
    /// Create a page fetcher
    pub fn new(transport: T, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch one page
    pub async fn fetch_page(&self, page: u32, credential: &Credential) -> Result<PageResult> {
        let request = build_page_request(&self.config, page, credential);
        debug!("Requesting page {page} of gists");

        let response = self
            .transport
            .get(&request)
            .await
            .map_err(Error::Transport)?;

        classify(response)
    }
}

/// Turn a raw response into a page or an error
fn classify(response: RawResponse) -> Result<PageResult> {
    match response.status {
        401 | 403 => {
            let body: ApiErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
            warn!("Gists request rejected with {}", response.status);
            Err(Error::auth(
                response.status,
                body.message,
                body.documentation_url,
            ))
        }
        200 => {
            let records: Vec<Gist> = serde_json::from_str(&response.body)?;
            let link = response.link();
            let link = link.as_deref();
            Ok(PageResult::new(records, pagination::has_next(link))
                .with_last_page(pagination::last_page(link)))
        }
        status => {
            warn!("Gists request failed with unexpected status {status}");
            Err(Error::UnexpectedStatus { status })
        }
    }
}
