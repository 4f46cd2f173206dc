//! CLI command definitions and dispatch.

pub mod browse;
pub mod datasets;
pub mod rows;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use wordsmith_client::{ApiClient, MemorySource};
use wordsmith_core::config::AppConfig;
use wordsmith_core::error::AppError;
use wordsmith_core::traits::query::RowSource;
use wordsmith_core::types::id::DatasetId;
use wordsmith_core::types::pagination::PageRequest;

use crate::output::OutputFormat;

/// Wordsmith — explore tabular datasets from the terminal
#[derive(Debug, Parser)]
#[command(name = "wordsmith", version, about, long_about = None)]
pub struct Cli {
    /// Configuration profile
    #[arg(short, long, default_value = "default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Browse local JSON dataset files instead of the remote API (repeatable)
    #[arg(long, value_name = "FILE")]
    pub data: Vec<PathBuf>,

    /// Override the API base URL from configuration
    #[arg(long)]
    pub api_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Dataset catalog
    Datasets(datasets::DatasetsArgs),
    /// Query one page of dataset rows
    Rows(rows::RowsArgs),
    /// Browse a dataset interactively
    Browse(browse::BrowseArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, mut config: AppConfig) -> Result<(), AppError> {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }

        let source = build_source(&config, &self.data).await?;

        match &self.command {
            Commands::Datasets(args) => datasets::execute(args, source.as_ref(), self.format).await,
            Commands::Rows(args) => {
                rows::execute(args, source.as_ref(), &config, self.format).await
            }
            Commands::Browse(args) => browse::execute(args, source, &config).await,
        }
    }
}

/// Helper: build the row source from local files or the API configuration
async fn build_source(
    config: &AppConfig,
    data: &[PathBuf],
) -> Result<Arc<dyn RowSource>, AppError> {
    if data.is_empty() {
        tracing::debug!(base_url = %config.api.base_url, "using remote API source");
        return Ok(Arc::new(ApiClient::new(&config.api)?));
    }

    let source = MemorySource::new();
    for path in data {
        source.load_json(path).await?;
    }
    tracing::debug!(files = data.len(), "using in-memory source");
    Ok(Arc::new(source))
}

/// Helper: resolve a dataset reference (UUID or name) to its identifier
pub async fn resolve_dataset(
    source: &dyn RowSource,
    reference: &str,
) -> Result<DatasetId, AppError> {
    if let Ok(id) = reference.parse::<DatasetId>() {
        return Ok(id);
    }

    let catalog = source.list_datasets(&PageRequest::new(0, 200)).await?;
    catalog
        .data
        .iter()
        .find(|d| d.name == reference)
        .map(|d| d.id)
        .ok_or_else(|| AppError::not_found(format!("No dataset named '{reference}'")))
}
