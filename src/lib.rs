//! # fetch-gists
//!
//! Fetch every gist belonging to the owner of a GitHub access token,
//! following the API's pagination until the last page.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fetch_gists::{fetch_gists, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let gists = fetch_gists("ghp_...").await?;
//!     println!("{} gists", gists.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  GistFetcher::fetch_all(token)               │
//! │  page 1 → page 2 → ... until no rel="next"   │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────┴───────────────────────┐
//! │  PageFetcher::fetch_page(page, credential)   │
//! │  401/403 → Auth, !200 → UnexpectedStatus     │
//! └──────────┬───────────────────────┬───────────┘
//!            │                       │
//! ┌──────────┴──────────┐ ┌──────────┴───────────┐
//! │ build_page_request  │ │ Transport (reqwest)  │
//! └─────────────────────┘ └──────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document error variant fields

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Request description, transport trait and reqwest client
pub mod http;

/// Link header inspection and pagination bookkeeping
pub mod pagination;

/// Request builder, page fetcher and pagination driver
pub mod gists;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FetchConfig;
pub use error::{Error, Result};
pub use gists::{
    fetch_gists, fetch_gists_with_config, Credential, FetchObserver, GistFetcher, NoopObserver,
    PageFetcher, TracingObserver,
};
pub use types::{Gist, Location};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
