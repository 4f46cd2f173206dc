//! Dataset catalog types.
//!
//! These describe what the remote collaborator knows about a dataset:
//! its summary line in the catalog and its column schema. The schema is
//! what the UI boundary validates filter targets against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::DatasetId;

/// Value kind of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Free text.
    Text,
    /// Integer or floating-point number.
    Number,
    /// Boolean flag.
    Boolean,
    /// Calendar date or timestamp.
    Date,
    /// List of values (e.g. assigned topics).
    List,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Date => write!(f, "date"),
            Self::List => write!(f, "list"),
        }
    }
}

/// One column of a dataset schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name, unique within the dataset.
    pub name: String,
    /// Value kind.
    pub kind: ColumnKind,
}

impl ColumnSchema {
    /// Create a new column schema entry.
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Catalog summary of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Dataset identifier.
    pub id: DatasetId,
    /// Human-readable name.
    pub name: String,
    /// Total row count.
    pub row_count: u64,
    /// Column count.
    pub column_count: u64,
    /// Upload time.
    pub created_at: DateTime<Utc>,
}

/// A single dataset row, keyed by column name.
pub type Row = serde_json::Map<String, serde_json::Value>;
