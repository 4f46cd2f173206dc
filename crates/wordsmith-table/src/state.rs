//! The per-view table state coordinator.

use wordsmith_core::types::filter::Filter;
use wordsmith_core::types::pagination::{PageMeta, PageRequest};
use wordsmith_core::types::query::ListParams;
use wordsmith_core::types::sorting::SortKey;

/// Composed pagination, sort, and filter state for one table view.
///
/// One instance exists per table view and lives as long as the view does.
/// UI controls write through the setters; the data-fetching layer reads
/// the composed state via [`TableState::params`]. The coordinator itself
/// never fetches, never validates column names, and never fails: every
/// setter is total over its input domain.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    page: PageRequest,
    sort: Option<SortKey>,
    filter: Option<Filter>,
    meta: Option<PageMeta>,
}

impl TableState {
    /// Create a coordinator with the given page size and everything else
    /// at defaults.
    pub fn new(limit: u64) -> Self {
        Self {
            page: PageRequest::new(0, limit),
            ..Self::default()
        }
    }

    /// Current page index (0-based).
    pub fn page(&self) -> u64 {
        self.page.page
    }

    /// Current page size.
    pub fn limit(&self) -> u64 {
        self.page.limit
    }

    /// Active sort instruction, if any.
    pub fn sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    /// Active filter tree, if any.
    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Metadata reconciled from the most recent response, if any.
    pub fn meta(&self) -> Option<&PageMeta> {
        self.meta.as_ref()
    }

    /// Replace the page index.
    ///
    /// Range constraints are enforced by disabling out-of-range controls
    /// at the UI layer, not here.
    pub fn set_page(&mut self, page: u64) {
        self.page.page = page;
    }

    /// Replace the page size and reset to the first page.
    ///
    /// Resetting avoids pointing past the end of the new page count.
    pub fn set_limit(&mut self, limit: u64) {
        self.page = PageRequest::new(0, limit);
    }

    /// Advance the sort state for a click on a column header.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = SortKey::toggle(self.sort.take(), column);
    }

    /// Replace the sort instruction wholesale.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    /// Replace the filter tree wholesale.
    pub fn set_filter(&mut self, filter: Option<Filter>) {
        self.filter = filter;
    }

    /// Drop the active filter.
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Return to defaults for a new view identity (e.g. another dataset).
    ///
    /// The page size is kept; it is a user preference, not view state.
    pub fn reset(&mut self) {
        self.page.page = 0;
        self.sort = None;
        self.filter = None;
        self.meta = None;
    }

    /// Reconcile response metadata into the coordinator.
    ///
    /// The responded page index is authoritative (the collaborator may
    /// have clamped it); `pages` is trusted and never recomputed here.
    pub fn apply_meta(&mut self, meta: PageMeta) {
        self.page.page = meta.page;
        self.meta = Some(meta);
    }

    /// Whether the reconciled metadata says a next page exists.
    pub fn has_next(&self) -> bool {
        self.meta.is_some_and(|m| m.has_next())
    }

    /// Whether the reconciled metadata says a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.meta.is_some_and(|m| m.has_previous())
    }

    /// Serialize the composed state into list-query parameters.
    ///
    /// The filter is deep-normalized so no redundant single-operand
    /// `and`/`or` wrappers reach the wire.
    pub fn params(&self) -> ListParams {
        ListParams::new(
            self.page,
            self.sort.clone(),
            self.filter.clone().map(Filter::normalize),
        )
    }
}
