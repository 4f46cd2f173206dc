//! Remote Wordsmith API client.
//!
//! Executes list queries over HTTP. Responses to identical list queries
//! are cached with a short TTL, and concurrent requests for the same
//! parameters are coalesced into a single fetch; superseded requests are
//! thereby deduplicated without any coordination from the table layer.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use wordsmith_core::config::api::ApiConfig;
use wordsmith_core::error::{AppError, ErrorKind};
use wordsmith_core::result::AppResult;
use wordsmith_core::traits::query::RowSource;
use wordsmith_core::types::catalog::{ColumnSchema, DatasetSummary, Row};
use wordsmith_core::types::id::DatasetId;
use wordsmith_core::types::pagination::PageRequest;
use wordsmith_core::types::query::{ListParams, ListResponse};

/// Response envelope used by every Wordsmith API endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    /// Whether the request succeeded.
    success: bool,
    /// The payload.
    data: T,
}

/// HTTP [`RowSource`] implementation backed by the Wordsmith API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Cache<String, ListResponse<Row>>,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .build();

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Unwrap the `{ success, data }` envelope of a response.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::not_found("Resource not found on the API"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "API returned {status}: {body}"
            )));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid API response: {e}")))?;
        if !envelope.success {
            return Err(AppError::external_service("API reported failure"));
        }
        Ok(envelope.data)
    }

    async fn fetch_rows(
        &self,
        dataset: &DatasetId,
        params: &ListParams,
    ) -> AppResult<ListResponse<Row>> {
        debug!(dataset = %dataset, page = params.page, "querying rows");
        let url = self.endpoint(&format!("/api/datasets/{dataset}/rows/query"));
        let response = self
            .http
            .post(url)
            .json(params)
            .send()
            .await
            .map_err(transport_error)?;
        Self::decode(response).await
    }
}

#[async_trait]
impl RowSource for ApiClient {
    async fn list_datasets(&self, page: &PageRequest) -> AppResult<ListResponse<DatasetSummary>> {
        let response = self
            .http
            .get(self.endpoint("/api/datasets"))
            .query(&[("page", page.page), ("limit", page.limit)])
            .send()
            .await
            .map_err(transport_error)?;
        Self::decode(response).await
    }

    async fn schema(&self, dataset: &DatasetId) -> AppResult<Vec<ColumnSchema>> {
        let response = self
            .http
            .get(self.endpoint(&format!("/api/datasets/{dataset}/schema")))
            .send()
            .await
            .map_err(transport_error)?;
        Self::decode(response).await
    }

    async fn query_rows(
        &self,
        dataset: &DatasetId,
        params: &ListParams,
    ) -> AppResult<ListResponse<Row>> {
        let key = format!("{dataset}:{}", serde_json::to_string(params)?);
        self.cache
            .try_get_with(key, self.fetch_rows(dataset, params))
            .await
            .map_err(|e| (*e).clone())
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("API request failed: {err}"),
        err,
    )
}
