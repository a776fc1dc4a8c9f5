//! Transport abstraction
//!
//! The page fetcher only ever talks to a `Transport`. Production code uses
//! [`HttpClient`](super::HttpClient); tests plug in stubs.

use super::request::PageRequest;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, LINK};

/// Raw response handed back by a transport
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body, undecoded
    pub body: String,
}

impl RawResponse {
    /// Create a response with a status and body and no headers
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Add a `Link` header line, keeping any already present
    ///
    /// Values that are not valid header text are ignored.
    #[must_use]
    pub fn with_link(mut self, link: &str) -> Self {
        if let Ok(value) = link.parse() {
            self.headers.append(LINK, value);
        }
        self
    }

    /// Every `Link` header line joined with `", "`, or `None` if there are none
    pub fn link(&self) -> Option<String> {
        let values: Vec<_> = self
            .headers
            .get_all(LINK)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

/// Capability to issue a single HTTP GET
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return whatever the server answered.
    ///
    /// Any non-2xx status is still an `Ok`; only failures to get an
    /// answer at all are errors.
    async fn get(&self, request: &PageRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, request: &PageRequest) -> Result<RawResponse, TransportError> {
        (**self).get(request).await
    }
}
