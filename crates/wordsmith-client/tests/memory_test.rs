//! Integration tests for the in-memory row source.

use serde_json::Value;

use wordsmith_client::MemorySource;
use wordsmith_core::traits::query::RowSource;
use wordsmith_core::types::catalog::{ColumnKind, ColumnSchema, Row};
use wordsmith_core::types::filter::Filter;
use wordsmith_core::types::id::DatasetId;
use wordsmith_core::types::pagination::PageRequest;
use wordsmith_core::types::query::ListParams;
use wordsmith_core::types::sorting::SortKey;

fn schema() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("idx", ColumnKind::Number),
        ColumnSchema::new("region", ColumnKind::Text),
        ColumnSchema::new("price", ColumnKind::Number),
    ]
}

fn rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let region = if i % 2 == 0 { "west" } else { "east" };
            match serde_json::json!({
                "idx": i,
                "region": region,
                "price": (count - i) as i64,
            }) {
                Value::Object(map) => map,
                _ => unreachable!(),
            }
        })
        .collect()
}

async fn seeded(count: usize) -> (MemorySource, DatasetId) {
    let source = MemorySource::new();
    let id = source.insert("press-releases", schema(), rows(count)).await;
    (source, id)
}

#[tokio::test]
async fn test_pagination_metadata() {
    let (source, id) = seeded(47).await;

    let params = ListParams::new(PageRequest::new(0, 15), None, None);
    let response = source.query_rows(&id, &params).await.expect("query");
    assert_eq!(response.data.len(), 15);
    assert_eq!(response.meta.pages, 4);
    assert_eq!(response.meta.total, 47);

    // Last page holds the remainder.
    let params = ListParams::new(PageRequest::new(3, 15), None, None);
    let response = source.query_rows(&id, &params).await.expect("query");
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.meta.page, 3);
    assert_eq!(response.meta.pages, 4);
    assert_eq!(response.meta.size, 15);
    assert_eq!(response.meta.total, 47);
}

#[tokio::test]
async fn test_page_past_the_end_is_echoed() {
    let (source, id) = seeded(10).await;

    let params = ListParams::new(PageRequest::new(9, 15), None, None);
    let response = source.query_rows(&id, &params).await.expect("query");
    assert!(response.data.is_empty());
    assert_eq!(response.meta.page, 9);
    assert_eq!(response.meta.pages, 1);
}

#[tokio::test]
async fn test_filtered_totals() {
    let (source, id) = seeded(47).await;

    let filter = Filter::equal_to("region", "west");
    let params = ListParams::new(PageRequest::new(0, 15), None, Some(filter));
    let response = source.query_rows(&id, &params).await.expect("query");
    // 24 of the 47 rows have an even index.
    assert_eq!(response.meta.total, 24);
    assert_eq!(response.meta.pages, 2);
    assert!(response
        .data
        .iter()
        .all(|row| row.get("region").and_then(Value::as_str) == Some("west")));
}

#[tokio::test]
async fn test_sorted_pages() {
    let (source, id) = seeded(20).await;

    let params = ListParams::new(
        PageRequest::new(0, 5),
        Some(SortKey::asc("price")),
        None,
    );
    let response = source.query_rows(&id, &params).await.expect("query");
    let prices: Vec<i64> = response
        .data
        .iter()
        .filter_map(|row| row.get("price").and_then(Value::as_i64))
        .collect();
    assert_eq!(prices, vec![1, 2, 3, 4, 5]);

    let params = ListParams::new(
        PageRequest::new(0, 5),
        Some(SortKey::desc("price")),
        None,
    );
    let response = source.query_rows(&id, &params).await.expect("query");
    let prices: Vec<i64> = response
        .data
        .iter()
        .filter_map(|row| row.get("price").and_then(Value::as_i64))
        .collect();
    assert_eq!(prices, vec![20, 19, 18, 17, 16]);
}

#[tokio::test]
async fn test_unknown_dataset() {
    let (source, _) = seeded(5).await;
    let params = ListParams::default();
    let err = source
        .query_rows(&DatasetId::new(), &params)
        .await
        .expect_err("should fail");
    assert_eq!(err.kind, wordsmith_core::error::ErrorKind::NotFound);
}

#[tokio::test]
async fn test_catalog_listing() {
    let source = MemorySource::new();
    source.insert("alpha", schema(), rows(3)).await;
    source.insert("beta", schema(), rows(4)).await;

    let response = source
        .list_datasets(&PageRequest::new(0, 25))
        .await
        .expect("list");
    assert_eq!(response.meta.total, 2);
    let names: Vec<&str> = response.data.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta"]);
    assert_eq!(response.data[0].row_count, 3);
    assert_eq!(response.data[0].column_count, 3);
}

#[tokio::test]
async fn test_schema_lookup() {
    let (source, id) = seeded(1).await;
    let columns = source.schema(&id).await.expect("schema");
    assert_eq!(columns, schema());
}
