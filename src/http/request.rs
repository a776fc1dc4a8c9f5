//! Outbound request description
//!
//! A `PageRequest` is plain data: it names the URL, headers and query
//! parameters of one GET and says nothing about how it is sent.

use std::collections::BTreeMap;

/// One HTTP GET, as produced by the request builder
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageRequest {
    /// Absolute URL, without query string
    pub url: String,
    /// Request headers
    pub headers: BTreeMap<String, String>,
    /// Query parameters
    pub query: BTreeMap<String, String>,
}

impl PageRequest {
    /// Create a request for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Look up a header, ignoring case
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Look up a query parameter
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}
