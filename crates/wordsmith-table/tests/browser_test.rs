//! End-to-end tests of the browser loop against the in-memory source.

use std::sync::Arc;

use serde_json::Value;

use wordsmith_client::MemorySource;
use wordsmith_core::types::catalog::{ColumnKind, ColumnSchema, Row};
use wordsmith_core::types::filter::Filter;
use wordsmith_core::types::id::DatasetId;
use wordsmith_core::types::sorting::SortKey;
use wordsmith_table::TableBrowser;

async fn seeded(count: usize) -> (Arc<MemorySource>, DatasetId) {
    let source = MemorySource::new();
    let schema = vec![
        ColumnSchema::new("idx", ColumnKind::Number),
        ColumnSchema::new("region", ColumnKind::Text),
    ];
    let rows: Vec<Row> = (0..count)
        .map(|i| {
            let region = if i % 2 == 0 { "west" } else { "east" };
            match serde_json::json!({"idx": i, "region": region}) {
                Value::Object(map) => map,
                _ => unreachable!(),
            }
        })
        .collect();
    let id = source.insert("speeches", schema, rows).await;
    (Arc::new(source), id)
}

fn indices(rows: &[Row]) -> Vec<i64> {
    rows.iter()
        .filter_map(|row| row.get("idx").and_then(Value::as_i64))
        .collect()
}

#[tokio::test]
async fn test_page_walk() {
    let (source, id) = seeded(47).await;
    let mut browser = TableBrowser::new(source, id, 15);

    let first = browser.refresh().await.expect("refresh");
    assert_eq!(indices(&first), (0..15).collect::<Vec<_>>());
    assert!(browser.state().has_next());
    assert!(!browser.state().has_previous());

    browser.next_page().await.expect("next");
    browser.next_page().await.expect("next");
    let last = browser.next_page().await.expect("next");
    assert_eq!(browser.state().page(), 3);
    assert_eq!(indices(&last), vec![45, 46]);
    assert!(!browser.state().has_next());

    // The next-page control is inert on the last page.
    let still_last = browser.next_page().await.expect("next");
    assert_eq!(browser.state().page(), 3);
    assert_eq!(indices(&still_last), vec![45, 46]);
}

#[tokio::test]
async fn test_previous_page_is_inert_on_first_page() {
    let (source, id) = seeded(20).await;
    let mut browser = TableBrowser::new(source, id, 15);
    browser.refresh().await.expect("refresh");

    let rows = browser.previous_page().await.expect("previous");
    assert_eq!(browser.state().page(), 0);
    assert_eq!(rows.len(), 15);
}

#[tokio::test]
async fn test_sort_toggle_resets_page() {
    let (source, id) = seeded(47).await;
    let mut browser = TableBrowser::new(source, id, 15);
    browser.refresh().await.expect("refresh");
    browser.go_to_page(2).await.expect("jump");

    let rows = browser.toggle_sort("idx").await.expect("sort");
    assert_eq!(browser.state().page(), 0);
    assert_eq!(browser.state().sort(), Some(&SortKey::asc("idx")));
    assert_eq!(indices(&rows)[0], 0);

    let rows = browser.toggle_sort("idx").await.expect("sort");
    assert_eq!(browser.state().sort(), Some(&SortKey::desc("idx")));
    assert_eq!(indices(&rows)[0], 46);

    browser.toggle_sort("idx").await.expect("sort");
    assert_eq!(browser.state().sort(), None);
}

#[tokio::test]
async fn test_filter_narrows_and_clears() {
    let (source, id) = seeded(47).await;
    let mut browser = TableBrowser::new(source, id, 15);
    browser.refresh().await.expect("refresh");
    browser.go_to_page(1).await.expect("jump");

    let rows = browser
        .apply_filter(Some(Filter::equal_to("region", "east")))
        .await
        .expect("filter");
    assert_eq!(browser.state().page(), 0);
    assert_eq!(browser.state().meta().map(|m| m.total), Some(23));
    assert!(rows
        .iter()
        .all(|row| row.get("region").and_then(Value::as_str) == Some("east")));

    browser.apply_filter(None).await.expect("clear");
    assert_eq!(browser.state().meta().map(|m| m.total), Some(47));
}

#[tokio::test]
async fn test_page_size_change_resets_page() {
    let (source, id) = seeded(47).await;
    let mut browser = TableBrowser::new(source, id, 15);
    browser.refresh().await.expect("refresh");
    browser.go_to_page(3).await.expect("jump");

    let rows = browser.set_page_size(25).await.expect("resize");
    assert_eq!(browser.state().page(), 0);
    assert_eq!(browser.state().limit(), 25);
    assert_eq!(rows.len(), 25);
    assert_eq!(browser.state().meta().map(|m| m.pages), Some(2));
}

#[tokio::test]
async fn test_switch_dataset_resets_view() {
    let (source, first) = seeded(47).await;
    let second = source
        .insert(
            "manifestos",
            vec![ColumnSchema::new("idx", ColumnKind::Number)],
            (0..5)
                .map(|i| match serde_json::json!({"idx": i}) {
                    Value::Object(map) => map,
                    _ => unreachable!(),
                })
                .collect(),
        )
        .await;

    let mut browser = TableBrowser::new(source, first, 15);
    browser.refresh().await.expect("refresh");
    browser.toggle_sort("idx").await.expect("sort");
    browser
        .apply_filter(Some(Filter::equal_to("region", "west")))
        .await
        .expect("filter");
    browser.next_page().await.expect("next");

    let rows = browser.switch_dataset(second).await.expect("switch");
    assert_eq!(browser.dataset(), &second);
    assert_eq!(browser.state().page(), 0);
    assert!(browser.state().sort().is_none());
    assert!(browser.state().filter().is_none());
    assert_eq!(rows.len(), 5);
}
