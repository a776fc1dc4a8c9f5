//! Common types used throughout fetch-gists
//!
//! Shared type aliases and small enums used by more than one module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A single gist as returned by the API.
///
/// Gists are never interpreted, only collected in order.
pub type Gist = JsonValue;

// ============================================================================
// Credential Placement
// ============================================================================

/// Where the access token is attached to each request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// `Authorization: token <credential>` header
    #[default]
    Header,
    /// `access_token=<credential>` query parameter
    Query,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Header => write!(f, "header"),
            Location::Query => write!(f, "query"),
        }
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "header" => Ok(Location::Header),
            "query" => Ok(Location::Query),
            other => Err(format!(
                "unknown credential location '{other}' (expected 'header' or 'query')"
            )),
        }
    }
}
