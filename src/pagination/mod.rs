//! Pagination module
//!
//! # Overview
//!
//! The gists endpoint paginates with page numbers and advertises further
//! pages through the `Link` response header. This module holds the
//! header inspection and the per-page / per-run bookkeeping types.

mod link;
mod types;

pub use link::{find_rel, has_next, last_page, parse_link_header, Link, NEXT_REL};
pub use types::{PageResult, PaginationState, FIRST_PAGE};

#[cfg(test)]
mod tests;
