//! Artwork record model.
//!
//! An [`ArtworkRecord`] is the client-side view of one object-detail response
//! from the collection API. Records are immutable for the lifetime of one
//! search and are discarded when the next search starts.

use serde::{Deserialize, Serialize};

use crate::settings::SortOrder;

/// One artwork from the collection API.
///
/// The API returns empty strings for missing text fields and `0` for missing
/// dates, so every field carries a serde default and deserialization never
/// fails on sparse records. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtworkRecord {
    /// Stable identifier assigned by the museum.
    #[serde(rename = "objectID")]
    pub object_id: u64,

    /// Display title of the work.
    pub title: String,

    /// Artist name as displayed by the museum.
    pub artist_display_name: String,

    /// Human-readable date of the work (e.g. "ca. 1650-1655").
    pub object_date: String,

    /// Year the work is believed to have been started.
    pub object_begin_date: i64,

    /// Year the work is believed to have been completed.
    pub object_end_date: i64,

    /// Materials the work is made of.
    pub medium: String,

    /// Museum-defined category label.
    pub classification: String,

    /// URL of the original-resolution primary image, if any.
    pub primary_image: String,

    /// URL of the scaled-down primary image, if any.
    pub primary_image_small: String,

    /// URL of the museum's page for the work.
    #[serde(rename = "objectURL")]
    pub object_url: String,
}

impl ArtworkRecord {
    /// Decodes a record from an object-detail JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Returns true if the record carries an original-resolution image URL.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.primary_image.is_empty()
    }

    /// Returns true if the record carries a thumbnail-sized image URL.
    #[must_use]
    pub fn has_small_image(&self) -> bool {
        !self.primary_image_small.is_empty()
    }

    /// Returns true if the record carries a museum page URL.
    #[must_use]
    pub fn has_page(&self) -> bool {
        !self.object_url.is_empty()
    }

    /// The URL to download for this record's thumbnail.
    ///
    /// Prefers the pre-scaled image; records that only carry the
    /// original-resolution URL fall back to it (the client scales down
    /// either way). `None` when the record has no image at all.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        if self.has_small_image() {
            Some(&self.primary_image_small)
        } else if self.has_image() {
            Some(&self.primary_image)
        } else {
            None
        }
    }
}

/// Sorts records by their object end date.
///
/// The sort is stable, so records with equal end dates keep their
/// fetch-completion order.
pub fn sort_by_date(records: &mut [ArtworkRecord], order: SortOrder) {
    match order {
        SortOrder::Ascending => records.sort_by_key(|r| r.object_end_date),
        SortOrder::Descending => {
            records.sort_by(|a, b| b.object_end_date.cmp(&a.object_end_date));
        }
    }
}

/// Returns the records to display for the given image-availability filter.
///
/// With `require_image` set, only records with a thumbnail-sized image URL
/// are kept; otherwise all records pass through.
#[must_use]
pub fn displayable(records: &[ArtworkRecord], require_image: bool) -> Vec<ArtworkRecord> {
    records
        .iter()
        .filter(|r| !require_image || r.has_small_image())
        .cloned()
        .collect()
}

/// Derives a file name from an image URL for save dialogs.
///
/// Takes the final path segment with the query and fragment stripped.
/// Returns `None` when the URL has no usable segment.
#[must_use]
pub fn image_file_name(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next()?;
    if name.is_empty() || name.contains(':') {
        return None;
    }
    Some(name.to_string())
}
