use crate::error::{Error, Result};
use std::fmt;

/// A non-empty access token
///
/// The token is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Validate a raw token; only the empty string is rejected
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::MissingCredential);
        }
        Ok(Self(token))
    }

    /// Validate an optional token, treating `None` like an empty one
    pub fn from_option(token: Option<&str>) -> Result<Self> {
        Self::new(token.unwrap_or_default())
    }

    /// The raw token
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
