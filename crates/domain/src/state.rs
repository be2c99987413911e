//! Search lifecycle state for UI binding.
//!
//! This module defines the state machine for one search, enabling the UI
//! to display appropriate feedback at each stage.

/// Represents the current state of a search in the UI.
///
/// - `Idle`: no search has run yet
/// - `Loading`: search in flight, show the loading label
/// - `Loaded`: results are displayed
/// - `Empty`: the search completed with nothing to display
/// - `Failed`: the search itself failed (per-row image failures are not
///   search failures and are reported on the affected row instead)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search has been started yet.
    #[default]
    Idle,

    /// A search is in progress.
    Loading,

    /// A search completed with results on screen.
    Loaded {
        /// Number of displayed records.
        count: usize,
    },

    /// A search completed but nothing matched the criteria.
    Empty,

    /// The search failed before any results could be shown.
    Failed {
        /// Error category for display.
        kind: SearchErrorKind,
        /// Human-readable error message.
        message: String,
    },
}

impl SearchState {
    /// Creates a Failed state.
    #[must_use]
    pub fn failed(kind: SearchErrorKind, message: impl Into<String>) -> Self {
        Self::Failed {
            kind,
            message: message.into(),
        }
    }

    /// Returns true if a search is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if results are on screen.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// The status line shown under the result list.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            Self::Idle | Self::Loaded { .. } => String::new(),
            Self::Loading => "Loading...".to_string(),
            Self::Empty => "No results found.".to_string(),
            Self::Failed { kind, message } => format!("{}: {message}", kind.title()),
        }
    }
}

/// Categories of search errors for user-friendly display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    /// The request could not reach the API.
    Network,

    /// The API answered with a non-success status.
    ApiStatus,

    /// The response body could not be decoded.
    Decode,

    /// The request timed out.
    Timeout,

    /// Unknown or unexpected error.
    Unknown,
}

impl SearchErrorKind {
    /// Returns a human-readable title for this error type.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Network => "Connection Failed",
            Self::ApiStatus => "Search Failed",
            Self::Decode => "Unexpected Response",
            Self::Timeout => "Request Timeout",
            Self::Unknown => "Unknown Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = SearchState::default();
        assert_eq!(state, SearchState::Idle);
        assert!(!state.is_loading());
        assert!(!state.is_loaded());
    }

    #[test]
    fn loading_status_text() {
        assert_eq!(SearchState::Loading.status_text(), "Loading...");
        assert!(SearchState::Loading.is_loading());
    }

    #[test]
    fn empty_status_text() {
        assert_eq!(SearchState::Empty.status_text(), "No results found.");
    }

    #[test]
    fn failed_status_combines_title_and_message() {
        let state = SearchState::failed(SearchErrorKind::Timeout, "no response after 30s");
        assert_eq!(state.status_text(), "Request Timeout: no response after 30s");
    }

    #[test]
    fn loaded_has_no_status_line() {
        let state = SearchState::Loaded { count: 12 };
        assert!(state.is_loaded());
        assert_eq!(state.status_text(), "");
    }
}
