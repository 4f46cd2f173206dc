//! Table view configuration.

use serde::{Deserialize, Serialize};

/// Defaults applied to every table view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Default number of rows per page.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Maximum number of rows per page.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    25
}

fn default_max_page_size() -> u64 {
    200
}
