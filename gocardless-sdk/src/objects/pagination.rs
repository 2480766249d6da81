//! Cursor pagination.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page size the API uses when no limit is requested.
pub const DEFAULT_LIMIT: u32 = 50;
/// Largest page size the API accepts.
pub const MAX_LIMIT: u32 = 500;

/// Pagination metadata returned alongside every list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub cursors: Cursor,
    /// Upper bound for the number of objects in the page.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            cursors: Cursor::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_json(self, f)
    }
}

/// Opaque markers delimiting a page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// ID of the object immediately following the returned page.
    pub before: Option<String>,
    /// ID of the object immediately preceding the returned page.
    pub after: Option<String>,
}

/// Query parameters selecting a page of a list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub before: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u32>,
}

impl ListParams {
    /// The page after the one `meta` describes.
    pub fn after(meta: &Meta) -> Option<Self> {
        meta.cursors.after.clone().map(|after| Self {
            after: Some(after),
            limit: Some(meta.limit),
            ..Self::default()
        })
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query pairs in a stable order, with the limit clamped to
    /// `1..=MAX_LIMIT`.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(before) = &self.before {
            pairs.push(("before", before.clone()));
        }
        if let Some(after) = &self.after {
            pairs.push(("after", after.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.clamp(1, MAX_LIMIT).to_string()));
        }
        pairs
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_defaults() {
        let meta: Meta = serde_json::from_value(json!({})).unwrap();
        assert_eq!(meta.limit, DEFAULT_LIMIT);
        assert_eq!(meta.cursors, Cursor::default());
    }

    #[test]
    fn test_meta_display_is_json() {
        let meta = Meta {
            cursors: Cursor {
                before: None,
                after: Some("CU123".to_string()),
            },
            limit: 10,
        };
        assert_eq!(
            meta.to_string(),
            r#"{"cursors":{"before":null,"after":"CU123"},"limit":10}"#
        );
    }

    #[test]
    fn test_list_params_query_clamps_limit() {
        let params = ListParams {
            before: Some("PM1".to_string()),
            after: None,
            limit: Some(10_000),
        };
        assert_eq!(
            params.to_query(),
            vec![("before", "PM1".to_string()), ("limit", "500".to_string())]
        );

        let params = ListParams::default().with_limit(0);
        assert_eq!(params.to_query(), vec![("limit", "1".to_string())]);
        assert!(ListParams::default().to_query().is_empty());
    }

    #[test]
    fn test_next_page_params() {
        let mut meta = Meta::default();
        assert_eq!(ListParams::after(&meta), None);

        meta.cursors.after = Some("MD9".to_string());
        let next = ListParams::after(&meta).unwrap();
        assert_eq!(next.after.as_deref(), Some("MD9"));
        assert_eq!(next.limit, Some(DEFAULT_LIMIT));
    }
}
