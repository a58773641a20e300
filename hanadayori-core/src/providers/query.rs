use hanadayori_model::Orientation;
use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 15;
/// Largest page size the provider honours.
pub const MAX_PER_PAGE: u32 = 80;

/// A normalized search request.
///
/// Serializes to exactly the query string the provider expects:
/// `query`, `page`, `per_page`, `orientation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
    pub orientation: Orientation,
}

impl SearchQuery {
    pub fn new(
        query: impl Into<String>,
        page: u32,
        per_page: u32,
        orientation: Orientation,
    ) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            orientation,
        }
    }

    /// Portrait search with default paging.
    pub fn portrait(query: impl Into<String>) -> Self {
        Self::new(query, DEFAULT_PAGE, DEFAULT_PER_PAGE, Orientation::Portrait)
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_is_clamped_to_provider_bounds() {
        let query = SearchQuery::new("roses", 0, 0, Orientation::Square);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 1);

        let query = SearchQuery::new("roses", 7, 500, Orientation::Square);
        assert_eq!(query.page, 7);
        assert_eq!(query.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn serializes_provider_parameter_names() {
        let query = SearchQuery::portrait("cherry blossom").with_page(3);
        let value = serde_json::to_value(&query).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "query": "cherry blossom",
                "page": 3,
                "per_page": 15,
                "orientation": "portrait"
            })
        );
    }
}
