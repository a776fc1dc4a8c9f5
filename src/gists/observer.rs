//! Per-page notifications from the pagination driver

use crate::error::Error;
use crate::pagination::PageResult;
use tracing::{info, warn};

/// Receives progress notifications while gists are being fetched
///
/// All methods default to doing nothing.
pub trait FetchObserver: Send + Sync {
    /// A request for `page` is about to be sent
    fn on_page_request(&self, _page: u32) {}

    /// `page` was fetched; `total` counts every gist collected so far
    fn on_page_fetched(&self, _page: u32, _result: &PageResult, _total: usize) {}

    /// Fetching `page` failed and the run is over
    fn on_error(&self, _page: u32, _error: &Error) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {}

/// Observer that reports progress through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_page_fetched(&self, page: u32, result: &PageResult, total: usize) {
        match result.last_page {
            Some(last) => info!(
                "Fetched page {page}/{last}: {} gists ({total} total)",
                result.len()
            ),
            None => info!("Fetched page {page}: {} gists ({total} total)", result.len()),
        }
    }

    fn on_error(&self, page: u32, error: &Error) {
        warn!("Fetching page {page} failed: {error}");
    }
}
