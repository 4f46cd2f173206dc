//! The remote data-fetching collaborator contract.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::catalog::{ColumnSchema, DatasetSummary, Row};
use crate::types::id::DatasetId;
use crate::types::pagination::PageRequest;
use crate::types::query::{ListParams, ListResponse};

/// A source of dataset rows.
///
/// The table coordinator serializes its composed state into [`ListParams`]
/// and hands them to an implementation of this trait. Execution policy
/// (caching, retrying, deduplicating identical in-flight requests,
/// discarding stale responses) belongs entirely to the implementation;
/// callers treat it as an opaque request/response contract.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// List the datasets available in the catalog.
    async fn list_datasets(&self, page: &PageRequest) -> AppResult<ListResponse<DatasetSummary>>;

    /// Fetch the column schema of a dataset.
    async fn schema(&self, dataset: &DatasetId) -> AppResult<Vec<ColumnSchema>>;

    /// Execute one list query against a dataset.
    async fn query_rows(
        &self,
        dataset: &DatasetId,
        params: &ListParams,
    ) -> AppResult<ListResponse<Row>>;
}
