//! In-memory row source.
//!
//! Serves datasets held in process memory: the stand-in for the remote
//! collaborator in tests and offline CLI browsing. Unlike the remote
//! client it actually evaluates filter trees, sorts, and paginates.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use wordsmith_core::error::AppError;
use wordsmith_core::result::AppResult;
use wordsmith_core::traits::query::RowSource;
use wordsmith_core::types::catalog::{ColumnSchema, DatasetSummary, Row};
use wordsmith_core::types::id::DatasetId;
use wordsmith_core::types::pagination::{PageMeta, PageRequest};
use wordsmith_core::types::query::{ListParams, ListResponse};

use crate::eval;

/// One dataset held in memory.
struct StoredDataset {
    summary: DatasetSummary,
    schema: Vec<ColumnSchema>,
    rows: Vec<Row>,
}

/// On-disk JSON document describing one dataset.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    /// Human-readable dataset name.
    name: String,
    /// Column schema.
    columns: Vec<ColumnSchema>,
    /// Row objects keyed by column name.
    rows: Vec<Row>,
}

/// In-memory [`RowSource`] implementation.
#[derive(Default)]
pub struct MemorySource {
    datasets: RwLock<Vec<StoredDataset>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset and return its generated identifier.
    pub async fn insert(
        &self,
        name: impl Into<String>,
        schema: Vec<ColumnSchema>,
        rows: Vec<Row>,
    ) -> DatasetId {
        let id = DatasetId::new();
        let summary = DatasetSummary {
            id,
            name: name.into(),
            row_count: rows.len() as u64,
            column_count: schema.len() as u64,
            created_at: Utc::now(),
        };
        self.datasets.write().await.push(StoredDataset {
            summary,
            schema,
            rows,
        });
        id
    }

    /// Load a dataset from a JSON file.
    pub async fn load_json(&self, path: &Path) -> AppResult<DatasetId> {
        let text = tokio::fs::read_to_string(path).await?;
        let file: DatasetFile = serde_json::from_str(&text)?;
        debug!(name = %file.name, rows = file.rows.len(), "loaded dataset file");
        Ok(self.insert(file.name, file.columns, file.rows).await)
    }
}

#[async_trait]
impl RowSource for MemorySource {
    async fn list_datasets(&self, page: &PageRequest) -> AppResult<ListResponse<DatasetSummary>> {
        let datasets = self.datasets.read().await;
        let total = datasets.len() as u64;
        let data: Vec<DatasetSummary> = datasets
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .map(|d| d.summary.clone())
            .collect();
        Ok(ListResponse::new(
            data,
            PageMeta::new(page.page, page.limit, total),
        ))
    }

    async fn schema(&self, dataset: &DatasetId) -> AppResult<Vec<ColumnSchema>> {
        let datasets = self.datasets.read().await;
        datasets
            .iter()
            .find(|d| d.summary.id == *dataset)
            .map(|d| d.schema.clone())
            .ok_or_else(|| AppError::not_found(format!("Unknown dataset: {dataset}")))
    }

    async fn query_rows(
        &self,
        dataset: &DatasetId,
        params: &ListParams,
    ) -> AppResult<ListResponse<Row>> {
        let datasets = self.datasets.read().await;
        let stored = datasets
            .iter()
            .find(|d| d.summary.id == *dataset)
            .ok_or_else(|| AppError::not_found(format!("Unknown dataset: {dataset}")))?;

        let mut selected: Vec<Row> = match &params.filter {
            Some(filter) => stored
                .rows
                .iter()
                .filter(|row| eval::matches(filter, row))
                .cloned()
                .collect(),
            None => stored.rows.clone(),
        };

        if let Some(sort) = &params.sort {
            selected.sort_by(|a, b| {
                let ordering = eval::compare_cells(a.get(&sort.name), b.get(&sort.name));
                if sort.asc { ordering } else { ordering.reverse() }
            });
        }

        let total = selected.len() as u64;
        let page = params.page_request();
        let data: Vec<Row> = selected
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();

        Ok(ListResponse::new(
            data,
            PageMeta::new(page.page, page.limit, total),
        ))
    }
}
