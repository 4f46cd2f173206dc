//! Binds one table coordinator to one row source.

use std::sync::Arc;

use tracing::debug;

use wordsmith_core::result::AppResult;
use wordsmith_core::traits::query::RowSource;
use wordsmith_core::types::catalog::Row;
use wordsmith_core::types::filter::Filter;
use wordsmith_core::types::id::DatasetId;

use crate::state::TableState;

/// One browsable table view over a dataset.
///
/// Every operation mutates the coordinator, re-submits the composed
/// state to the row source, and reconciles the returned metadata. Page
/// resets on sort/filter changes happen here, at the control layer; the
/// coordinator's setters stay plain replacements.
pub struct TableBrowser {
    source: Arc<dyn RowSource>,
    dataset: DatasetId,
    state: TableState,
}

impl TableBrowser {
    /// Create a browser over the given dataset.
    pub fn new(source: Arc<dyn RowSource>, dataset: DatasetId, limit: u64) -> Self {
        Self {
            source,
            dataset,
            state: TableState::new(limit),
        }
    }

    /// The dataset currently shown.
    pub fn dataset(&self) -> &DatasetId {
        &self.dataset
    }

    /// The coordinator backing this view.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Fetch the page for the current composed state.
    pub async fn refresh(&mut self) -> AppResult<Vec<Row>> {
        let params = self.state.params();
        debug!(dataset = %self.dataset, page = params.page, limit = params.limit, "fetching page");
        let response = self.source.query_rows(&self.dataset, &params).await?;
        self.state.apply_meta(response.meta);
        Ok(response.data)
    }

    /// Advance to the next page if one exists.
    pub async fn next_page(&mut self) -> AppResult<Vec<Row>> {
        if self.state.has_next() {
            self.state.set_page(self.state.page() + 1);
        }
        self.refresh().await
    }

    /// Return to the previous page if one exists.
    pub async fn previous_page(&mut self) -> AppResult<Vec<Row>> {
        if self.state.has_previous() {
            self.state.set_page(self.state.page() - 1);
        }
        self.refresh().await
    }

    /// Jump to a specific page.
    pub async fn go_to_page(&mut self, page: u64) -> AppResult<Vec<Row>> {
        self.state.set_page(page);
        self.refresh().await
    }

    /// Change the page size (resets to the first page).
    pub async fn set_page_size(&mut self, limit: u64) -> AppResult<Vec<Row>> {
        self.state.set_limit(limit);
        self.refresh().await
    }

    /// Toggle the sort on a column header and show the first page.
    pub async fn toggle_sort(&mut self, column: &str) -> AppResult<Vec<Row>> {
        self.state.toggle_sort(column);
        self.state.set_page(0);
        self.refresh().await
    }

    /// Replace the filter and show the first page.
    pub async fn apply_filter(&mut self, filter: Option<Filter>) -> AppResult<Vec<Row>> {
        self.state.set_filter(filter);
        self.state.set_page(0);
        self.refresh().await
    }

    /// Switch to another dataset, resetting the view state.
    pub async fn switch_dataset(&mut self, dataset: DatasetId) -> AppResult<Vec<Row>> {
        self.dataset = dataset;
        self.state.reset();
        self.refresh().await
    }
}
