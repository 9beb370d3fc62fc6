//! Query-string construction for list endpoints.

use std::fmt::Write as _;

/// Pagination, search and filter parameters for a list call.
///
/// Renders as `?page=..&limit=..&search=..&<filters>` with every value
/// percent-encoded; unset parameters are omitted and an empty query renders
/// as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    page: Option<u32>,
    limit: Option<u32>,
    search: Option<String>,
    filters: Vec<(&'static str, String)>,
}

impl ListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Free-text search; blank input is ignored.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.trim().is_empty()).then(|| term.trim().to_string());
        self
    }

    /// Add a backend filter such as `villageId` or `status`.
    #[must_use]
    pub fn filter(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.filters.push((key, value.into()));
        self
    }

    /// Add a filter only when `value` is present.
    #[must_use]
    pub fn filter_opt(self, key: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.filter(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.limit.is_none() && self.search.is_none() && self.filters.is_empty()
    }

    /// Render the query string, including the leading `?` when non-empty.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs.extend(self.filters.iter().map(|(k, v)| (*k, v.clone())));

        let mut out = String::new();
        for (i, (key, value)) in pairs.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            let _ = write!(out, "{key}={}", urlencoding::encode(value));
        }
        out
    }

    /// `path` with this query appended.
    #[must_use]
    pub fn apply(&self, path: &str) -> String {
        format!("{path}{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_query_renders_nothing() {
        let query = ListQuery::new().search("   ");
        assert!(query.is_empty());
        assert_eq!(query.apply("/api/families"), "/api/families");
    }

    #[test]
    fn parameters_render_in_fixed_order() {
        let query = ListQuery::new()
            .filter("villageId", "vil-1")
            .search("Ram Lal")
            .limit(20)
            .page(2);
        assert_eq!(
            query.to_query_string(),
            "?page=2&limit=20&search=Ram%20Lal&villageId=vil-1"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let query = ListQuery::new().filter("status", "A&B=C");
        assert_eq!(query.to_query_string(), "?status=A%26B%3DC");
    }

    #[test]
    fn optional_filters_are_skipped() {
        let query = ListQuery::new()
            .filter_opt("chokhlaId", None::<String>)
            .filter_opt("status", Some("PENDING"));
        assert_eq!(query.to_query_string(), "?status=PENDING");
    }
}
