//! Paginated list responses and list-query filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Paginated list response, shared by every collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Optional query-string filters accepted by list endpoints.
///
/// Unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn ordering(mut self, field: impl Into<String>) -> Self {
        self.ordering = Some(field.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_api_shape() {
        let json = r#"{
            "count": 42,
            "total_pages": 3,
            "current_page": 2,
            "page_size": 20,
            "next": "http://api/empresas/?page=3",
            "previous": "http://api/empresas/?page=1",
            "results": [1, 2, 3]
        }"#;

        let page: Page<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 42);
        assert_eq!(page.results, vec![1, 2, 3]);
        assert!(page.has_next());
    }

    #[test]
    fn unset_filters_serialize_to_nothing() {
        let value = serde_json::to_value(ListQuery::new()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn builder_sets_only_what_is_asked() {
        let query = ListQuery::new().page(2).search("dron");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({"page": 2, "search": "dron"}));
    }
}
