//! Terminal rendering for dataset pages and catalog listings.

use serde::Serialize;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

use wordsmith_core::types::catalog::Row;
use wordsmith_core::types::pagination::PageMeta;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered table plus a pagination line
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Print one page of display rows with its pagination line.
///
/// In JSON mode the page is emitted in the same `{data, meta}` shape the
/// list endpoints respond with, so output can be piped back into
/// `--filter`-driven tooling.
pub fn print_listing<T: Serialize + Tabled>(items: &[T], meta: &PageMeta, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No rows on this page.");
            } else {
                println!("{}", Table::new(items));
            }
            print_page_line(meta);
        }
        OutputFormat::Json => {
            let body = serde_json::json!({ "data": items, "meta": meta });
            let json = serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Render dataset rows as a table, in the schema's column order.
///
/// Dataset columns are only known at runtime, so this goes through the
/// row builder rather than a `Tabled` derive.
pub fn render_rows(columns: &[String], rows: &[Row]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().cloned());
    for row in rows {
        builder.push_record(columns.iter().map(|name| cell_text(row.get(name))));
    }
    builder.build().to_string()
}

/// Print the pagination status line under a rendered page.
pub fn print_page_line(meta: &PageMeta) {
    println!(
        "page {}/{} ({} rows total)",
        meta.page + 1,
        meta.pages,
        meta.total
    );
}

fn cell_text(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
