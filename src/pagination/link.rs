//! Link header inspection (RFC 5988)
//!
//! Format: `Link: <https://api.github.com/gists?page=2>; rel="next", ...`

use url::Url;

/// Substring that marks a following page
pub const NEXT_REL: &str = r#"rel="next""#;

/// One entry of a Link header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target URL, without the angle brackets
    pub url: String,
    /// Relation label (`next`, `last`, ...)
    pub rel: String,
}

/// True if the header advertises a next page.
///
/// Plain substring match, so loosely formatted headers still count.
pub fn has_next(header: Option<&str>) -> bool {
    header.is_some_and(|h| h.contains(NEXT_REL))
}

/// Parse a Link header into its entries
///
/// Entries without both a `<url>` and a `rel` are skipped.
pub fn parse_link_header(header: &str) -> Vec<Link> {
    let mut links = Vec::new();

    for part in header.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if let Some(inner) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                url = Some(inner);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                rel = Some(stripped.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            links.push(Link {
                url: u.to_string(),
                rel: r.to_string(),
            });
        }
    }

    links
}

/// Find the URL for a given rel
pub fn find_rel(header: &str, target_rel: &str) -> Option<String> {
    parse_link_header(header)
        .into_iter()
        .find(|link| link.rel == target_rel)
        .map(|link| link.url)
}

/// Page number of the `rel="last"` link, if the header carries one
pub fn last_page(header: Option<&str>) -> Option<u32> {
    let last = find_rel(header?, "last")?;
    let url = Url::parse(&last).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
