//! Request builder for one page of `GET /gists`

use super::credential::Credential;
use crate::config::FetchConfig;
use crate::http::PageRequest;
use crate::types::Location;

/// Build the request for `page` (1-based). Pure: no I/O.
pub fn build_page_request(config: &FetchConfig, page: u32, credential: &Credential) -> PageRequest {
    let request = PageRequest::new(config.gists_url())
        .header("User-Agent", &config.user_agent)
        .header("Accept", &config.accept)
        .query("page", page.to_string())
        .query("per_page", config.per_page.to_string());

    match config.auth_location {
        Location::Header => {
            request.header("Authorization", format!("token {}", credential.expose()))
        }
        Location::Query => request.query("access_token", credential.expose()),
    }
}
