//! Collection API port.

use std::future::Future;
use std::pin::Pin;

use curio_domain::{ArtworkRecord, SearchErrorKind, SearchQuery};
use thiserror::Error;

/// Errors from the collection API adapter.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request URL could not be built or parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The API answered with a non-success status.
    #[error("API answered with status {code}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
    },

    /// The request timed out.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The request could not reach the API.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

impl From<&ApiError> for SearchErrorKind {
    fn from(error: &ApiError) -> Self {
        match error {
            ApiError::Status { .. } => Self::ApiStatus,
            ApiError::Timeout { .. } => Self::Timeout,
            ApiError::Connection(_) => Self::Network,
            ApiError::Decode(_) => Self::Decode,
            ApiError::InvalidUrl(_) | ApiError::Other(_) => Self::Unknown,
        }
    }
}

/// Port for the museum's collection search and object-detail endpoints.
///
/// Implementations must not borrow the query past the call: returned
/// futures may only capture `self` and owned data.
pub trait CollectionApi: Send + Sync {
    /// Searches the collection and returns matching object IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded. An absent ID list in the response decodes as empty.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u64>, ApiError>> + Send + '_>>;

    /// Fetches the detail record for one object.
    ///
    /// Returns `Ok(None)` when the API reports an error for this particular
    /// object; individual objects failing is an expected, skippable outcome
    /// during the search fan-out.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures.
    fn object_detail(
        &self,
        object_id: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Option<ArtworkRecord>, ApiError>> + Send + '_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_mapping() {
        assert_eq!(
            SearchErrorKind::from(&ApiError::Status { code: 502 }),
            SearchErrorKind::ApiStatus
        );
        assert_eq!(
            SearchErrorKind::from(&ApiError::Timeout { timeout_ms: 30_000 }),
            SearchErrorKind::Timeout
        );
        assert_eq!(
            SearchErrorKind::from(&ApiError::Connection("refused".to_string())),
            SearchErrorKind::Network
        );
        assert_eq!(
            SearchErrorKind::from(&ApiError::Decode("bad json".to_string())),
            SearchErrorKind::Decode
        );
    }

    #[test]
    fn error_display() {
        let error = ApiError::Status { code: 404 };
        assert_eq!(error.to_string(), "API answered with status 404");
    }
}
