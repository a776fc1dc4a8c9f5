//! Tests for pagination module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

const GITHUB_LINK: &str = r#"<https://api.github.com/gists?page=2&per_page=100>; rel="next", <https://api.github.com/gists?page=7&per_page=100>; rel="last""#;

// ============================================================================
// Next Page Detection Tests
// ============================================================================

#[test_case(None, false ; "missing header")]
#[test_case(Some(""), false ; "empty header")]
#[test_case(Some(GITHUB_LINK), true ; "github style")]
#[test_case(Some(r#"<link?page=2> rel="next", <link?page=99> rel="last""#), true ; "no semicolons")]
#[test_case(Some(r#"<https://api.github.com/gists?page=1>; rel="prev", <https://api.github.com/gists?page=1>; rel="first""#), false ; "last page")]
#[test_case(Some(r#"<https://api.github.com/gists?page=2>; rel=next"#), false ; "unquoted rel")]
fn test_has_next(header: Option<&str>, expected: bool) {
    assert_eq!(has_next(header), expected);
}

// ============================================================================
// Link Header Parsing Tests
// ============================================================================

#[test]
fn test_parse_link_header() {
    let links = parse_link_header(GITHUB_LINK);
    assert_eq!(
        links,
        vec![
            Link {
                url: "https://api.github.com/gists?page=2&per_page=100".to_string(),
                rel: "next".to_string(),
            },
            Link {
                url: "https://api.github.com/gists?page=7&per_page=100".to_string(),
                rel: "last".to_string(),
            },
        ]
    );
}

#[test]
fn test_parse_link_header_skips_malformed() {
    let links = parse_link_header(r#"garbage, <https://x.test/a>; rel="next", <https://x.test/b>"#);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].rel, "next");
}

#[test]
fn test_find_rel() {
    assert_eq!(
        find_rel(GITHUB_LINK, "next"),
        Some("https://api.github.com/gists?page=2&per_page=100".to_string())
    );
    assert_eq!(find_rel(GITHUB_LINK, "prev"), None);
}

#[test_case(Some(GITHUB_LINK), Some(7) ; "github style")]
#[test_case(None, None ; "missing header")]
#[test_case(Some(r#"<https://api.github.com/gists?page=2>; rel="next""#), None ; "no last link")]
#[test_case(Some(r#"<link?page=99> rel="last""#), None ; "relative url")]
fn test_last_page(header: Option<&str>, expected: Option<u32>) {
    assert_eq!(last_page(header), expected);
}

// ============================================================================
// PageResult Tests
// ============================================================================

#[test]
fn test_page_result() {
    let page = PageResult::new(vec![json!({"id": "a"}), json!({"id": "b"})], true)
        .with_last_page(Some(3));
    assert_eq!(page.len(), 2);
    assert!(!page.is_empty());
    assert!(page.has_next);
    assert_eq!(page.last_page, Some(3));

    let empty = PageResult::default();
    assert!(empty.is_empty());
    assert!(!empty.has_next);
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.page, FIRST_PAGE);
    assert_eq!(state.pages_fetched, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

#[test]
fn test_pagination_state_advance() {
    let mut state = PaginationState::new();

    state.advance(&PageResult::new(vec![json!({}), json!({})], true));
    assert_eq!(state.page, 2);
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.total_fetched, 2);
    assert!(!state.done);

    state.advance(&PageResult::new(vec![json!({})], false));
    assert_eq!(state.page, 2);
    assert_eq!(state.pages_fetched, 2);
    assert_eq!(state.total_fetched, 3);
    assert!(state.done);
}

#[test]
fn test_pagination_state_stops_at_last_page_number() {
    let mut state = PaginationState::with_page(u32::MAX);

    state.advance(&PageResult::new(vec![json!({})], true));
    assert_eq!(state.page, u32::MAX);
    assert_eq!(state.pages_fetched, 1);
    assert!(state.done);
}
