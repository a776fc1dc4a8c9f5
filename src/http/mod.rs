//! HTTP module
//!
//! Separates *what* is sent from *how* it is sent.
//!
//! # Features
//!
//! - **PageRequest**: plain description of one GET (URL, headers, query)
//! - **Transport**: the single capability the page fetcher depends on
//! - **HttpClient**: reqwest implementation of `Transport`

mod client;
mod request;
mod transport;

pub use client::{HttpClient, HttpClientConfig};
pub use request::PageRequest;
pub use transport::{RawResponse, Transport};
