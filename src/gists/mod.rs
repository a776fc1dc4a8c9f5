//! Gists module
//!
//! Fetches the complete list of gists for an access token.
//!
//! # Overview
//!
//! - `build_page_request` - pure construction of one page request
//! - `PageFetcher` - one GET, classified into a page or an error
//! - `GistFetcher` - sequential pagination driver with an optional observer

mod credential;
mod driver;
mod fetcher;
mod observer;
mod request;

pub use credential::Credential;
pub use driver::GistFetcher;
pub use fetcher::PageFetcher;
pub use observer::{FetchObserver, NoopObserver, TracingObserver};
pub use request::build_page_request;

use crate::config::FetchConfig;
use crate::error::Result;
use crate::types::Gist;

/// Fetch every gist for `token` from api.github.com
pub async fn fetch_gists(token: &str) -> Result<Vec<Gist>> {
    fetch_gists_with_config(FetchConfig::default(), token).await
}

/// Fetch every gist for `token` using a custom configuration
pub async fn fetch_gists_with_config(config: FetchConfig, token: &str) -> Result<Vec<Gist>> {
    // Check the token before anything touches the network
    let credential = Credential::new(token)?;
    GistFetcher::from_config(config)?
        .fetch_all_with(&credential)
        .await
}
