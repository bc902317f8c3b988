//! `Link` header navigation for paged GitHub responses.
//!
//! GitHub signals further result pages through a `Link` response header
//! whose value is a comma-separated list of `<url>; rel="relation"`
//! entries. Pagination follows the `next` relation until it disappears.

/// Extracts the `rel="next"` target from a `Link` header value.
///
/// Scans the comma-separated entries for the one whose `rel` parameter is
/// exactly `next` (quoted or bare) and returns the URL from inside its
/// angle brackets. Returns `None` when no such entry exists; entries that
/// do not follow the `<url>; params` shape are skipped.
#[must_use]
pub fn next_page_url(link_header: &str) -> Option<&str> {
    link_header.split(',').find_map(next_target)
}

fn next_target(entry: &str) -> Option<&str> {
    let (target, params) = entry.split_once(';')?;

    let is_next = params.split(';').any(|param| {
        param
            .trim()
            .strip_prefix("rel=")
            .is_some_and(|relation| relation.trim_matches('"') == "next")
    });
    if !is_next {
        return None;
    }

    target.trim().strip_prefix('<')?.strip_suffix('>')
}
