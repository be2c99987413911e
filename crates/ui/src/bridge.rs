//! UI Bridge Module
//!
//! Defines the communication protocol between the Slint UI thread
//! and the async Tokio runtime. Everything crossing the bridge is plain
//! data; toolkit image types never leave the UI thread, so pixels travel
//! as raw RGBA buffers.

use std::path::PathBuf;

use curio_application::ports::DecodedImage;
use curio_domain::{ArtworkRecord, SearchState};

/// Commands sent from UI to the async runtime.
#[derive(Debug, Clone)]
pub enum UiCommand {
    /// User clicked Search or pressed Enter in the search field.
    Search {
        /// Free-text term from the search field.
        term: String,
        /// Selected classification, empty for "any".
        classification: String,
        /// State of the "Has Images" check box.
        has_images: bool,
    },

    /// User changed the date ordering.
    OrderChanged {
        /// Combo box index of the new order.
        index: i32,
    },

    /// User toggled the "Has Images" check box.
    HasImagesToggled {
        /// New check box state.
        checked: bool,
    },

    /// User clicked a loaded thumbnail; open the viewer on the full image.
    OpenViewer {
        /// Original-resolution image URL.
        image_url: String,
        /// Museum page URL, empty when the record has none.
        page_url: String,
    },

    /// User asked to open an object page in the default browser.
    LearnMore {
        /// Museum page URL.
        url: String,
    },

    /// User picked a save path for a row's full-size image.
    DownloadImage {
        /// Original-resolution image URL to fetch.
        url: String,
        /// Destination chosen in the save dialog.
        path: PathBuf,
    },

    /// User picked a save path for the image currently in the viewer.
    SaveViewerImage {
        /// Destination chosen in the save dialog.
        path: PathBuf,
    },
}

/// A decoded image crossing the bridge as raw RGBA8 pixels.
#[derive(Debug, Clone)]
pub struct PixelData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 pixel data, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl From<DecodedImage> for PixelData {
    fn from(decoded: DecodedImage) -> Self {
        Self {
            width: decoded.width,
            height: decoded.height,
            rgba: decoded.pixels,
        }
    }
}

/// One result row for UI display.
#[derive(Debug, Clone)]
pub struct ResultRowData {
    /// Display title, "N/A" when the record has none.
    pub title: String,
    /// Artist display name, "N/A" when the record has none.
    pub artist: String,
    /// Human-readable work date, "N/A" when the record has none.
    pub date: String,
    /// Medium, "N/A" when the record has none.
    pub medium: String,
    /// Classification, "N/A" when the record has none.
    pub classification: String,
    /// Original-resolution image URL, empty when the record has none.
    pub image_url: String,
    /// Museum page URL, empty when the record has none.
    pub page_url: String,
    /// Whether a thumbnail download is underway for this row.
    pub has_thumbnail: bool,
}

impl ResultRowData {
    /// Builds the row presentation for one record.
    #[must_use]
    pub fn from_record(record: &ArtworkRecord) -> Self {
        Self {
            title: text_or_na(&record.title),
            artist: text_or_na(&record.artist_display_name),
            date: text_or_na(&record.object_date),
            medium: text_or_na(&record.medium),
            classification: text_or_na(&record.classification),
            image_url: record.primary_image.clone(),
            page_url: record.object_url.clone(),
            has_thumbnail: record.thumbnail_url().is_some(),
        }
    }
}

fn text_or_na(text: &str) -> String {
    if text.is_empty() {
        "N/A".to_string()
    } else {
        text.to_string()
    }
}

/// Updates sent from the async runtime to the UI.
///
/// Search-scoped updates carry the generation of the search that produced
/// them; the UI drops updates from superseded generations so at most one
/// search is ever displayed.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Settings loaded from disk at startup.
    SettingsLoaded {
        /// Combo box index of the persisted classification.
        classification_index: i32,
        /// Persisted "Has Images" state.
        has_images: bool,
        /// Combo box index of the persisted ordering.
        order_index: i32,
    },

    /// Update the search lifecycle state (status line, loading label).
    State(SearchState),

    /// Replace the displayed result rows.
    Results {
        /// Search generation that produced these rows.
        generation: u64,
        /// Rows in display order.
        rows: Vec<ResultRowData>,
    },

    /// A row's thumbnail finished downloading.
    Thumbnail {
        /// Search generation the row belongs to.
        generation: u64,
        /// Row index in display order.
        row: usize,
        /// Scaled thumbnail pixels.
        image: PixelData,
    },

    /// A row's thumbnail download or decode failed.
    ThumbnailFailed {
        /// Search generation the row belongs to.
        generation: u64,
        /// Row index in display order.
        row: usize,
    },

    /// The viewer should open and show its loading state.
    ViewerLoading {
        /// Image URL being fetched, kept for the save dialog file name.
        image_url: String,
        /// Museum page URL for the Learn More button, may be empty.
        page_url: String,
    },

    /// The viewer's full image finished loading.
    ViewerImage {
        /// Original-resolution pixels.
        image: PixelData,
    },

    /// The viewer's full image failed to load.
    ViewerFailed {
        /// Message for the viewer's status label.
        message: String,
    },

    /// A background operation failed; show it on the status line.
    Error {
        /// Short error title.
        title: String,
        /// Human-readable error message.
        message: String,
    },
}
