use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// List envelope returned by paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

const fn first_page() -> u32 {
    1
}

impl<T> Paginated<T> {
    /// Whether pages remain after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        let seen = u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
            + self.data.len() as u64;
        seen < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_tracks_total() {
        let page: Paginated<u32> = Paginated {
            data: vec![1, 2],
            total: 5,
            page: 2,
            limit: 2,
        };
        assert!(page.has_more());

        let last: Paginated<u32> = Paginated {
            data: vec![5],
            total: 5,
            page: 3,
            limit: 2,
        };
        assert!(!last.has_more());
    }

    #[test]
    fn defaults_apply_when_backend_omits_meta() {
        let page: Paginated<String> = serde_json::from_str(r#"{"data":["a"]}"#).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 0);
    }
}
