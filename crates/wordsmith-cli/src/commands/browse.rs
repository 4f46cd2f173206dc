//! Interactive dataset browser.
//!
//! Plays the role of the original UI controls: the pagination bar,
//! column-header sort toggle, and filter drawer all become prompt
//! actions driving one [`TableBrowser`]. Out-of-range pagination targets
//! are never offered, so the coordinator never sees them.

use std::sync::Arc;

use clap::Args;
use dialoguer::{Input, Select};

use wordsmith_core::config::AppConfig;
use wordsmith_core::error::AppError;
use wordsmith_core::traits::query::RowSource;
use wordsmith_core::types::catalog::ColumnSchema;
use wordsmith_core::types::filter::Filter;
use wordsmith_core::types::id::DatasetId;
use wordsmith_core::types::pagination::PageRequest;
use wordsmith_table::TableBrowser;

use crate::output;

const ACTION_NEXT: &str = "Next page";
const ACTION_PREVIOUS: &str = "Previous page";
const ACTION_JUMP: &str = "Jump to page";
const ACTION_SIZE: &str = "Page size";
const ACTION_SORT: &str = "Toggle sort on a column";
const ACTION_FILTER: &str = "Set filter";
const ACTION_CLEAR_FILTER: &str = "Clear filter";
const ACTION_QUIT: &str = "Quit";

/// Arguments for the browse command
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Dataset name or UUID (prompted when omitted)
    pub dataset: Option<String>,
}

/// Execute the browse command
pub async fn execute(
    args: &BrowseArgs,
    source: Arc<dyn RowSource>,
    config: &AppConfig,
) -> Result<(), AppError> {
    let dataset = match &args.dataset {
        Some(reference) => super::resolve_dataset(source.as_ref(), reference).await?,
        None => pick_dataset(source.as_ref()).await?,
    };
    let columns = source.schema(&dataset).await?;
    let column_names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();

    let mut browser = TableBrowser::new(source, dataset, config.table.default_page_size);
    let mut rows = browser.refresh().await?;

    loop {
        println!("{}", output::render_rows(&column_names, &rows));
        if let Some(meta) = browser.state().meta() {
            output::print_page_line(meta);
        }
        if let Some(sort) = browser.state().sort() {
            println!(
                "sorted by {} ({})",
                sort.name,
                if sort.asc { "ascending" } else { "descending" }
            );
        }

        let mut actions = Vec::new();
        if browser.state().has_next() {
            actions.push(ACTION_NEXT);
        }
        if browser.state().has_previous() {
            actions.push(ACTION_PREVIOUS);
        }
        actions.extend([ACTION_JUMP, ACTION_SIZE, ACTION_SORT, ACTION_FILTER]);
        if browser.state().filter().is_some() {
            actions.push(ACTION_CLEAR_FILTER);
        }
        actions.push(ACTION_QUIT);

        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        rows = match actions[choice] {
            ACTION_NEXT => browser.next_page().await?,
            ACTION_PREVIOUS => browser.previous_page().await?,
            ACTION_JUMP => {
                let last = browser.state().meta().map(|m| m.last_page()).unwrap_or(0);
                let page: u64 = Input::new()
                    .with_prompt(format!("Page (1-{})", last + 1))
                    .interact_text()
                    .map_err(prompt_error)?;
                // Clamp here; the coordinator does not range-check.
                browser.go_to_page(page.saturating_sub(1).min(last)).await?
            }
            ACTION_SIZE => {
                let limit: u64 = Input::new()
                    .with_prompt("Rows per page")
                    .interact_text()
                    .map_err(prompt_error)?;
                browser.set_page_size(limit).await?
            }
            ACTION_SORT => {
                let index = Select::new()
                    .with_prompt("Column")
                    .items(&column_names)
                    .default(0)
                    .interact()
                    .map_err(prompt_error)?;
                browser.toggle_sort(&column_names[index]).await?
            }
            ACTION_FILTER => {
                let text: String = Input::new()
                    .with_prompt("Filter (condition like region=west, && to combine, or JSON)")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_error)?;
                match parse_filter_input(&text, &columns) {
                    Ok(filter) => browser.apply_filter(filter).await?,
                    Err(err) => {
                        eprintln!("Filter rejected: {err}");
                        continue;
                    }
                }
            }
            ACTION_CLEAR_FILTER => browser.apply_filter(None).await?,
            _ => break,
        };
    }

    Ok(())
}

/// Prompt for one of the catalog's datasets.
async fn pick_dataset(source: &dyn RowSource) -> Result<DatasetId, AppError> {
    let catalog = source.list_datasets(&PageRequest::new(0, 200)).await?;
    if catalog.data.is_empty() {
        return Err(AppError::not_found("The dataset catalog is empty"));
    }

    let labels: Vec<String> = catalog
        .data
        .iter()
        .map(|d| format!("{} ({} rows)", d.name, d.row_count))
        .collect();
    let index = Select::new()
        .with_prompt("Dataset")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(catalog.data[index].id)
}

/// Turn the filter prompt text into a validated tree.
///
/// Empty input clears the filter. Input starting with `{` is parsed as a
/// raw JSON tree; anything else is `&&`-separated conditions.
fn parse_filter_input(
    text: &str,
    columns: &[ColumnSchema],
) -> Result<Option<Filter>, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let filter = if text.starts_with('{') {
        super::rows::build_filter(&[], Some(text))?
    } else {
        let conditions: Vec<String> = text.split("&&").map(|c| c.trim().to_string()).collect();
        super::rows::build_filter(&conditions, None)?
    };

    if let Some(filter) = &filter {
        super::rows::validate_targets(filter, columns)?;
    }
    Ok(filter)
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Prompt failed: {err}"))
}
