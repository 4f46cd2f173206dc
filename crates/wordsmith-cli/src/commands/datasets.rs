//! Dataset catalog CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::{Table, Tabled};

use wordsmith_core::error::AppError;
use wordsmith_core::traits::query::RowSource;
use wordsmith_core::types::pagination::PageRequest;

use crate::output::{self, OutputFormat};

/// Arguments for dataset commands
#[derive(Debug, Args)]
pub struct DatasetsArgs {
    /// Dataset subcommand
    #[command(subcommand)]
    pub command: DatasetsCommand,
}

/// Dataset subcommands
#[derive(Debug, Subcommand)]
pub enum DatasetsCommand {
    /// List datasets in the catalog
    List {
        /// Page index (0-based)
        #[arg(short, long, default_value = "0")]
        page: u64,
        /// Datasets per page
        #[arg(short, long, default_value = "25")]
        limit: u64,
    },
    /// Show the column schema of a dataset
    Schema {
        /// Dataset name or UUID
        dataset: String,
    },
}

/// Dataset display row
#[derive(Debug, Serialize, Tabled)]
struct DatasetRow {
    /// ID
    id: String,
    /// Name
    name: String,
    /// Rows
    rows: u64,
    /// Columns
    columns: u64,
    /// Created
    created: String,
}

/// Column display row
#[derive(Debug, Serialize, Tabled)]
struct ColumnRow {
    /// Column name
    name: String,
    /// Value kind
    kind: String,
}

/// Execute dataset commands
pub async fn execute(
    args: &DatasetsArgs,
    source: &dyn RowSource,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        DatasetsCommand::List { page, limit } => {
            let response = source.list_datasets(&PageRequest::new(*page, *limit)).await?;

            let items: Vec<DatasetRow> = response
                .data
                .iter()
                .map(|d| DatasetRow {
                    id: d.id.to_string(),
                    name: d.name.clone(),
                    rows: d.row_count,
                    columns: d.column_count,
                    created: d.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_listing(&items, &response.meta, format);
        }
        DatasetsCommand::Schema { dataset } => {
            let id = super::resolve_dataset(source, dataset).await?;
            let columns = source.schema(&id).await?;

            let items: Vec<ColumnRow> = columns
                .iter()
                .map(|c| ColumnRow {
                    name: c.name.clone(),
                    kind: c.kind.to_string(),
                })
                .collect();

            match format {
                OutputFormat::Table => println!("{}", Table::new(&items)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
            }
        }
    }

    Ok(())
}
