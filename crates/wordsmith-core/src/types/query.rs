//! List-query request and response wire types.

use serde::{Deserialize, Serialize};

use crate::types::filter::Filter;
use crate::types::pagination::{PageMeta, PageRequest};
use crate::types::sorting::SortKey;

/// Request parameters for one list query.
///
/// This is the exact request body of the list/search operation; any
/// change to a field triggers a new fetch by the data-fetching layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    /// Page index (0-based).
    pub page: u64,
    /// Rows per page.
    pub limit: u64,
    /// Active sort instruction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
    /// Active filter tree, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
}

impl ListParams {
    /// Build parameters from their parts.
    pub fn new(page: PageRequest, sort: Option<SortKey>, filter: Option<Filter>) -> Self {
        Self {
            page: page.page,
            limit: page.limit,
            sort,
            filter,
        }
    }

    /// The pagination part of these parameters.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(PageRequest::default(), None, None)
    }
}

/// One page of items plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T: Serialize> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata derived by the collaborator.
    pub meta: PageMeta,
}

impl<T: Serialize> ListResponse<T> {
    /// Create a new list response.
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::filter::Filter;

    #[test]
    fn test_params_wire_format() {
        let params = ListParams::new(
            PageRequest::new(2, 15),
            Some(SortKey::asc("price")),
            Some(Filter::equal_to("region", "west")),
        );
        let json = serde_json::to_value(&params).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "page": 2,
                "limit": 15,
                "sort": {"name": "price", "asc": true},
                "filter": {"type": "equal_to", "target": "region", "value": "west"},
            })
        );
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let params = ListParams::new(PageRequest::new(0, 25), None, None);
        let json = serde_json::to_value(&params).expect("serialize");
        assert_eq!(json, serde_json::json!({"page": 0, "limit": 25}));
    }

    #[test]
    fn test_response_roundtrip() {
        let response = ListResponse::new(
            vec![serde_json::json!({"region": "west"})],
            PageMeta::new(0, 15, 1),
        );
        let json = serde_json::to_string(&response).expect("serialize");
        let parsed: ListResponse<serde_json::Value> =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.data, response.data);
        assert_eq!(parsed.meta, response.meta);
    }
}
