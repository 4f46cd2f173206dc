//! Core type definitions used across the Wordsmith workspace.

pub mod catalog;
pub mod filter;
pub mod id;
pub mod pagination;
pub mod query;
pub mod sorting;

pub use catalog::{ColumnKind, ColumnSchema, DatasetSummary, Row};
pub use filter::{Filter, FilterValue};
pub use id::*;
pub use pagination::{PageMeta, PageRequest};
pub use query::{ListParams, ListResponse};
pub use sorting::SortKey;
