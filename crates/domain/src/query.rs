//! Search query model.

use crate::artwork::ArtworkRecord;

/// User-entered search criteria for one collection search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text search term.
    pub term: String,

    /// Selected classification, empty for "any".
    pub classification: String,

    /// Restrict results to objects the API reports as having images.
    pub has_images: bool,
}

impl SearchQuery {
    /// Creates a query from the raw form values.
    #[must_use]
    pub fn new(
        term: impl Into<String>,
        classification: impl Into<String>,
        has_images: bool,
    ) -> Self {
        Self {
            term: term.into(),
            classification: classification.into(),
            has_images,
        }
    }

    /// The term actually sent to the API.
    ///
    /// When the free-text field is empty the classification doubles as the
    /// search term, matching the upstream API's behavior of requiring `q`.
    #[must_use]
    pub fn effective_term(&self) -> &str {
        if self.term.is_empty() {
            &self.classification
        } else {
            &self.term
        }
    }

    /// Returns true if a classification filter is active.
    #[must_use]
    pub fn has_classification(&self) -> bool {
        !self.classification.is_empty()
    }

    /// Applies the classification filter to a fetched record.
    ///
    /// The API's own classification matching is fuzzy, so the filter is
    /// re-applied client-side as a case-insensitive equality check. Without
    /// an active classification every record matches.
    #[must_use]
    pub fn matches_classification(&self, record: &ArtworkRecord) -> bool {
        if !self.has_classification() {
            return true;
        }
        record.classification.eq_ignore_ascii_case(&self.classification)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn term_wins_over_classification() {
        let query = SearchQuery::new("sunflowers", "Paintings", true);
        assert_eq!(query.effective_term(), "sunflowers");
    }

    #[test]
    fn classification_is_the_fallback_term() {
        let query = SearchQuery::new("", "Paintings", false);
        assert_eq!(query.effective_term(), "Paintings");
    }

    #[test]
    fn classification_filter_is_case_insensitive() {
        let query = SearchQuery::new("vase", "Ceramics", false);

        let mut record = ArtworkRecord {
            classification: "ceramics".to_string(),
            ..ArtworkRecord::default()
        };
        assert!(query.matches_classification(&record));

        record.classification = "Drawings".to_string();
        assert!(!query.matches_classification(&record));
    }

    #[test]
    fn empty_classification_matches_everything() {
        let query = SearchQuery::new("vase", "", false);
        let record = ArtworkRecord::default();
        assert!(query.matches_classification(&record));
    }
}
