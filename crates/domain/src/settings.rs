//! User settings domain model.
//!
//! Defines the search-form preferences that persist across runs.

use serde::{Deserialize, Serialize};

/// Result ordering by object end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest works first (default).
    #[default]
    Ascending,
    /// Newest works first.
    Descending,
}

impl SortOrder {
    /// Display label for the order combo box.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Convert to index for UI combo box.
    #[must_use]
    pub const fn to_index(self) -> i32 {
        match self {
            Self::Ascending => 0,
            Self::Descending => 1,
        }
    }

    /// Create from UI combo box index.
    #[must_use]
    pub const fn from_index(index: i32) -> Self {
        match index {
            1 => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Persisted user preferences for the search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Last selected classification, empty for "any".
    #[serde(default)]
    pub classification: String,

    /// Whether the "Has Images" filter was checked.
    #[serde(default = "default_has_images")]
    pub has_images: bool,

    /// Last selected result ordering.
    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_has_images() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            classification: String::new(),
            has_images: default_has_images(),
            sort_order: SortOrder::default(),
        }
    }
}
