//! Search orchestration use case.

use std::sync::Arc;

use curio_domain::{ArtworkRecord, SearchQuery, config};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::ports::{ApiError, CollectionApi, SearchToken};

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one record matched the criteria.
    Results(Vec<ArtworkRecord>),

    /// The search completed but nothing matched.
    Empty,

    /// The search was cancelled before completing; nothing may be shown.
    Cancelled,
}

/// Use case for running one collection search end to end.
///
/// Issues the ID search, fans out the object-detail fetches with a bounded
/// number in flight, and applies the client-side classification filter.
/// Detail fetches complete in no particular order; the caller sorts for
/// display.
pub struct SearchArtworks<C: CollectionApi> {
    api: Arc<C>,
    concurrency: usize,
}

impl<C: CollectionApi> SearchArtworks<C> {
    /// Creates the use case with the default fan-out bound.
    #[must_use]
    pub fn new(api: Arc<C>) -> Self {
        Self::with_concurrency(api, config::DETAIL_FETCH_CONCURRENCY)
    }

    /// Creates the use case with an explicit fan-out bound.
    #[must_use]
    pub fn with_concurrency(api: Arc<C>, concurrency: usize) -> Self {
        Self {
            api,
            concurrency: concurrency.max(1),
        }
    }

    /// Runs the search.
    ///
    /// Individual object-detail failures are logged and skipped; only the
    /// ID search failing fails the whole operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID search fails.
    pub async fn execute(
        &self,
        query: &SearchQuery,
        token: &SearchToken,
    ) -> Result<SearchOutcome, ApiError> {
        let ids = self.api.search(query).await?;
        if token.is_cancelled() {
            return Ok(SearchOutcome::Cancelled);
        }
        if ids.is_empty() {
            return Ok(SearchOutcome::Empty);
        }

        debug!(total = ids.len(), "search returned object IDs");

        let records: Vec<ArtworkRecord> = stream::iter(ids.into_iter().take(config::MAX_RESULTS))
            .map(|id| self.api.object_detail(id))
            .buffer_unordered(self.concurrency)
            .filter_map(|result| async move {
                match result {
                    Ok(record) => record,
                    Err(error) => {
                        warn!(%error, "skipping object after failed detail fetch");
                        None
                    }
                }
            })
            .collect()
            .await;

        if token.is_cancelled() {
            return Ok(SearchOutcome::Cancelled);
        }

        let records: Vec<ArtworkRecord> = records
            .into_iter()
            .filter(|record| query.matches_classification(record))
            .collect();

        if records.is_empty() {
            Ok(SearchOutcome::Empty)
        } else {
            Ok(SearchOutcome::Results(records))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;

    use pretty_assertions::assert_eq;

    use super::*;

    /// In-memory collection API for orchestration tests.
    #[derive(Default)]
    struct FakeApi {
        ids: Vec<u64>,
        records: HashMap<u64, ArtworkRecord>,
        failing: Vec<u64>,
        search_error: Option<u16>,
    }

    impl FakeApi {
        fn with_records(records: Vec<ArtworkRecord>) -> Self {
            Self {
                ids: records.iter().map(|r| r.object_id).collect(),
                records: records.into_iter().map(|r| (r.object_id, r)).collect(),
                ..Self::default()
            }
        }
    }

    impl CollectionApi for FakeApi {
        fn search(
            &self,
            _query: &SearchQuery,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<u64>, ApiError>> + Send + '_>> {
            let result = match self.search_error {
                Some(code) => Err(ApiError::Status { code }),
                None => Ok(self.ids.clone()),
            };
            Box::pin(async move { result })
        }

        fn object_detail(
            &self,
            object_id: u64,
        ) -> Pin<Box<dyn Future<Output = Result<Option<ArtworkRecord>, ApiError>> + Send + '_>>
        {
            let result = if self.failing.contains(&object_id) {
                Err(ApiError::Connection("reset".to_string()))
            } else {
                Ok(self.records.get(&object_id).cloned())
            };
            Box::pin(async move { result })
        }
    }

    fn record(id: u64, classification: &str) -> ArtworkRecord {
        ArtworkRecord {
            object_id: id,
            classification: classification.to_string(),
            ..ArtworkRecord::default()
        }
    }

    #[tokio::test]
    async fn returns_matching_records() {
        let api = FakeApi::with_records(vec![record(1, "Paintings"), record(2, "Paintings")]);
        let search = SearchArtworks::new(Arc::new(api));

        let outcome = search
            .execute(&SearchQuery::new("wheat", "", true), &SearchToken::new())
            .await
            .unwrap();

        match outcome {
            SearchOutcome::Results(records) => assert_eq!(records.len(), 2),
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_id_list_is_empty_outcome() {
        let api = FakeApi::default();
        let search = SearchArtworks::new(Arc::new(api));

        let outcome = search
            .execute(&SearchQuery::new("nothing", "", false), &SearchToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, SearchOutcome::Empty);
    }

    #[tokio::test]
    async fn classification_filter_can_empty_the_results() {
        let api = FakeApi::with_records(vec![record(1, "Drawings"), record(2, "Prints")]);
        let search = SearchArtworks::new(Arc::new(api));

        let outcome = search
            .execute(&SearchQuery::new("", "Paintings", false), &SearchToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, SearchOutcome::Empty);
    }

    #[tokio::test]
    async fn classification_filter_keeps_matches_only() {
        let api = FakeApi::with_records(vec![
            record(1, "Paintings"),
            record(2, "Drawings"),
            record(3, "paintings"),
        ]);
        let search = SearchArtworks::new(Arc::new(api));

        let outcome = search
            .execute(&SearchQuery::new("", "Paintings", false), &SearchToken::new())
            .await
            .unwrap();

        match outcome {
            SearchOutcome::Results(records) => {
                let mut ids: Vec<u64> = records.iter().map(|r| r.object_id).collect();
                ids.sort_unstable();
                assert_eq!(ids, vec![1, 3]);
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failing_details_are_skipped() {
        let mut api = FakeApi::with_records(vec![record(1, ""), record(2, ""), record(3, "")]);
        api.failing = vec![2];
        let search = SearchArtworks::new(Arc::new(api));

        let outcome = search
            .execute(&SearchQuery::new("vase", "", false), &SearchToken::new())
            .await
            .unwrap();

        match outcome {
            SearchOutcome::Results(records) => {
                let mut ids: Vec<u64> = records.iter().map(|r| r.object_id).collect();
                ids.sort_unstable();
                assert_eq!(ids, vec![1, 3]);
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn all_details_failing_is_empty_not_an_error() {
        let mut api = FakeApi::with_records(vec![record(1, ""), record(2, "")]);
        api.failing = vec![1, 2];
        let search = SearchArtworks::new(Arc::new(api));

        let outcome = search
            .execute(&SearchQuery::new("vase", "", false), &SearchToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, SearchOutcome::Empty);
    }

    #[tokio::test]
    async fn id_list_is_truncated_to_the_result_cap() {
        let records: Vec<ArtworkRecord> = (0..200).map(|id| record(id, "")).collect();
        let api = FakeApi::with_records(records);
        let search = SearchArtworks::new(Arc::new(api));

        let outcome = search
            .execute(&SearchQuery::new("many", "", false), &SearchToken::new())
            .await
            .unwrap();

        match outcome {
            SearchOutcome::Results(records) => assert_eq!(records.len(), config::MAX_RESULTS),
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancelled_search_delivers_nothing() {
        let api = FakeApi::with_records(vec![record(1, "")]);
        let search = SearchArtworks::new(Arc::new(api));
        let token = SearchToken::new();
        token.cancel();

        let outcome = search
            .execute(&SearchQuery::new("wheat", "", false), &token)
            .await
            .unwrap();

        assert_eq!(outcome, SearchOutcome::Cancelled);
    }

    #[tokio::test]
    async fn search_failure_propagates() {
        let api = FakeApi {
            search_error: Some(503),
            ..FakeApi::default()
        };
        let search = SearchArtworks::new(Arc::new(api));

        let result = search
            .execute(&SearchQuery::new("wheat", "", false), &SearchToken::new())
            .await;

        assert!(matches!(result, Err(ApiError::Status { code: 503 })));
    }
}
