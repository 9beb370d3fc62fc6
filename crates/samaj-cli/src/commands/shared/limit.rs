use samaj_api::ListQuery;

use crate::cli::GlobalFlags;

/// Largest page size requested from the backend.
const MAX_PAGE_SIZE: u32 = 100;

/// Compute effective page size with precedence: global flag -> config default,
/// clamped to `1..=100`.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    flag.unwrap_or(configured).clamp(1, MAX_PAGE_SIZE)
}

/// Pagination and search parameters shared by every list command.
#[must_use]
pub fn page_query(
    page: Option<u32>,
    search: Option<&str>,
    flags: &GlobalFlags,
    configured_limit: u32,
) -> ListQuery {
    let mut query = ListQuery::new()
        .page(page.unwrap_or(1).max(1))
        .limit(effective_limit(flags.limit, configured_limit));
    if let Some(search) = search {
        query = query.search(search);
    }
    query
}
