//! Collection API client using reqwest.
//!
//! This adapter implements the `CollectionApi` port against the museum's
//! public collection endpoints: `GET /search` for matching object IDs and
//! `GET /objects/{id}` for one object's detail record.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use curio_domain::{ArtworkRecord, SearchQuery, config};
use curio_application::ports::{ApiError, CollectionApi};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Per-request timeout in milliseconds.
const REQUEST_TIMEOUT_MS: u64 = 30_000;

/// The `/search` response envelope.
///
/// The API reports "no matches" as a JSON `null` ID list rather than an
/// empty array, hence the `Option`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "objectIDs")]
    object_ids: Option<Vec<u64>>,
}

/// Collection API client backed by `reqwest::Client`.
pub struct HttpCollectionApi {
    client: Client,
    base_url: String,
}

impl HttpCollectionApi {
    /// Creates a client for the public collection API.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - Follow redirects: up to 10
    /// - User-Agent: "Curio/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(config::API_URL)
    }

    /// Creates a client against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent("Curio/0.1.0")
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()
            .map_err(|e| ApiError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Builds the `/search` query parameters.
    ///
    /// `hasImages` is only sent when the filter is on; the parameter order
    /// is kept stable because the API is sensitive to it.
    fn search_params(query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if query.has_images {
            params.push(("hasImages", "true".to_string()));
        }
        params.push(("q", query.effective_term().to_string()));
        params
    }

    /// Maps reqwest errors to the port's `ApiError`.
    fn map_error(error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            return ApiError::Timeout {
                timeout_ms: REQUEST_TIMEOUT_MS,
            };
        }
        if error.is_connect() {
            return ApiError::Connection(error.to_string());
        }
        if error.is_decode() {
            return ApiError::Decode(error.to_string());
        }
        ApiError::Other(error.to_string())
    }
}

impl CollectionApi for HttpCollectionApi {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u64>, ApiError>> + Send + '_>> {
        let url = format!("{}/search", self.base_url);
        let params = Self::search_params(query);

        Box::pin(async move {
            let response = self
                .client
                .get(&url)
                .query(&params)
                .send()
                .await
                .map_err(Self::map_error)?;

            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status {
                    code: status.as_u16(),
                });
            }

            let body: SearchResponse = response.json().await.map_err(Self::map_error)?;
            Ok(body.object_ids.unwrap_or_default())
        })
    }

    fn object_detail(
        &self,
        object_id: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Option<ArtworkRecord>, ApiError>> + Send + '_>> {
        let url = format!("{}/objects/{object_id}", self.base_url);

        Box::pin(async move {
            let response = self.client.get(&url).send().await.map_err(Self::map_error)?;

            let status = response.status();
            if !status.is_success() {
                debug!(object_id, code = status.as_u16(), "object detail unavailable");
                return Ok(None);
            }

            let record: ArtworkRecord = response.json().await.map_err(Self::map_error)?;
            Ok(Some(record))
        })
    }
}
