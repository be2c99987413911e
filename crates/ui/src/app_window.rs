//! Application window management
//!
//! Wires the Slint main window to the async runtime: widget callbacks send
//! [`UiCommand`]s over a channel to a Tokio runtime running on a worker
//! thread, and a repeating timer on the UI thread drains [`UiUpdate`]s back
//! into window properties.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use curio_application::ports::{ApiError, ImageError, SearchToken};
use curio_application::{
    FetchThumbnail, LoadFullImage, SaveImage, SearchArtworks, SearchOutcome,
};
use curio_domain::{
    ArtworkRecord, CLASSIFICATION_OPTIONS, SearchErrorKind, SearchQuery, SearchState, SortOrder,
    UserSettings, displayable, image_file_name, sort_by_date,
};
use curio_infrastructure::{HttpCollectionApi, HttpImageFetcher, SettingsRepository};
use slint::{ComponentHandle, Model, ModelRc, Rgba8Pixel, SharedPixelBuffer, SharedString, VecModel};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::bridge::{PixelData, ResultRowData, UiCommand, UiUpdate};
use crate::{MainWindow, ResultRow, ViewerWindow};

// Thumbnail slot states, mirrored by the `thumb-state` markup property.
const THUMB_NO_IMAGE: i32 = 0;
const THUMB_LOADING: i32 = 1;
const THUMB_LOADED: i32 = 2;
const THUMB_FAILED: i32 = 3;

/// Application window wrapper with business logic bindings.
pub struct AppWindow {
    window: MainWindow,
}

impl AppWindow {
    /// Creates a new application window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new() -> Result<Self, slint::PlatformError> {
        let window = MainWindow::new()?;
        let ui_weak = window.as_weak();

        // Create channels for UI <-> async communication
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();
        let (update_tx, mut update_rx) = mpsc::unbounded_channel::<UiUpdate>();

        // Classification catalog for the combo box
        let options: Vec<SharedString> = CLASSIFICATION_OPTIONS
            .iter()
            .map(|option| SharedString::from(*option))
            .collect();
        window.set_classification_options(ModelRc::new(VecModel::from(options)));

        // Clone command senders for each callback
        let cmd_tx_search = cmd_tx.clone();
        let cmd_tx_order = cmd_tx.clone();
        let cmd_tx_filter = cmd_tx.clone();
        let cmd_tx_thumb = cmd_tx.clone();
        let cmd_tx_learn = cmd_tx.clone();
        let cmd_tx_download = cmd_tx.clone();

        // Set up UI callbacks
        let weak_search = ui_weak.clone();
        window.on_search_clicked(move || {
            if let Some(ui) = weak_search.upgrade() {
                let _ = cmd_tx_search.send(UiCommand::Search {
                    term: ui.get_query_text().to_string(),
                    classification: classification_at(ui.get_classification_index()),
                    has_images: ui.get_has_images(),
                });
            }
        });

        window.on_order_changed(move |index| {
            let _ = cmd_tx_order.send(UiCommand::OrderChanged { index });
        });

        window.on_has_images_toggled(move |checked| {
            let _ = cmd_tx_filter.send(UiCommand::HasImagesToggled { checked });
        });

        let weak_thumb = ui_weak.clone();
        window.on_thumbnail_clicked(move |index| {
            if let Some(ui) = weak_thumb.upgrade()
                && let Some(row) = ui.get_results().row_data(index as usize)
                && !row.image_url.is_empty()
            {
                let _ = cmd_tx_thumb.send(UiCommand::OpenViewer {
                    image_url: row.image_url.to_string(),
                    page_url: row.page_url.to_string(),
                });
            }
        });

        let weak_learn = ui_weak.clone();
        window.on_learn_more(move |index| {
            if let Some(ui) = weak_learn.upgrade()
                && let Some(row) = ui.get_results().row_data(index as usize)
                && !row.page_url.is_empty()
            {
                let _ = cmd_tx_learn.send(UiCommand::LearnMore {
                    url: row.page_url.to_string(),
                });
            }
        });

        let weak_download = ui_weak.clone();
        window.on_download_image(move |index| {
            if let Some(ui) = weak_download.upgrade()
                && let Some(row) = ui.get_results().row_data(index as usize)
                && !row.image_url.is_empty()
            {
                let url = row.image_url.to_string();
                let tx = cmd_tx_download.clone();
                // rfd blocks, keep the dialog off the UI thread
                std::thread::spawn(move || {
                    if let Some(path) = save_dialog(&url) {
                        let _ = tx.send(UiCommand::DownloadImage { url, path });
                    }
                });
            }
        });

        // Spawn the async runtime in a separate thread
        std::thread::spawn(move || {
            run_async_runtime(cmd_rx, update_tx);
        });

        // UI-side state shared between the update pump and the viewer window
        let ui_state = Rc::new(RefCell::new(UiState::default()));

        // Process UI updates on the main thread using a timer
        let ui_weak_update = ui_weak;
        let pump_state = Rc::clone(&ui_state);
        let pump_cmd_tx = cmd_tx;
        let timer = slint::Timer::default();
        timer.start(
            slint::TimerMode::Repeated,
            std::time::Duration::from_millis(16), // ~60fps
            move || {
                while let Ok(update) = update_rx.try_recv() {
                    if let Some(ui) = ui_weak_update.upgrade() {
                        apply_update(&ui, &pump_state, &pump_cmd_tx, update);
                    }
                }
            },
        );

        // Keep the timer alive by storing it
        // Note: We leak the timer intentionally to keep it running for the app lifetime
        std::mem::forget(timer);

        Ok(Self { window })
    }

    /// Runs the application event loop.
    ///
    /// This method blocks until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop fails.
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        self.window.run()
    }

    /// Returns a reference to the underlying Slint window.
    #[must_use]
    pub const fn window(&self) -> &MainWindow {
        &self.window
    }
}

impl Default for AppWindow {
    fn default() -> Self {
        Self::new().expect("Failed to create application window")
    }
}

/// Looks up the classification label behind a combo box index.
fn classification_at(index: i32) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| CLASSIFICATION_OPTIONS.get(i))
        .map_or_else(String::new, |option| (*option).to_string())
}

/// Opens a save dialog with the file name derived from the image URL.
fn save_dialog(url: &str) -> Option<std::path::PathBuf> {
    let file_name = image_file_name(url).unwrap_or_else(|| "image.jpg".to_string());
    rfd::FileDialog::new()
        .set_title("Save Image")
        .set_file_name(file_name)
        .save_file()
}

/// UI-thread state: the live row model, the current display generation and
/// the lazily created viewer window.
#[derive(Default)]
struct UiState {
    generation: u64,
    rows: Option<Rc<VecModel<ResultRow>>>,
    viewer: Option<ViewerWindow>,
    viewer_image_url: String,
    viewer_page_url: String,
}

/// Applies one update from the async runtime to the window.
fn apply_update(
    ui: &MainWindow,
    state: &Rc<RefCell<UiState>>,
    cmd_tx: &mpsc::UnboundedSender<UiCommand>,
    update: UiUpdate,
) {
    match update {
        UiUpdate::SettingsLoaded {
            classification_index,
            has_images,
            order_index,
        } => {
            ui.set_classification_index(classification_index);
            ui.set_has_images(has_images);
            ui.set_order_index(order_index);
        }

        UiUpdate::State(search_state) => {
            ui.set_status_text(SharedString::from(search_state.status_text()));
        }

        UiUpdate::Results { generation, rows } => {
            let model = Rc::new(VecModel::from(
                rows.into_iter().map(to_result_row).collect::<Vec<_>>(),
            ));
            ui.set_results(ModelRc::from(Rc::clone(&model)));
            let mut state = state.borrow_mut();
            state.generation = generation;
            state.rows = Some(model);
        }

        UiUpdate::Thumbnail {
            generation,
            row,
            image,
        } => {
            let state = state.borrow();
            if generation != state.generation {
                return; // superseded search
            }
            if let Some(model) = state.rows.as_ref()
                && let Some(mut data) = model.row_data(row)
            {
                data.thumbnail = to_slint_image(&image);
                data.thumb_state = THUMB_LOADED;
                model.set_row_data(row, data);
            }
        }

        UiUpdate::ThumbnailFailed { generation, row } => {
            let state = state.borrow();
            if generation != state.generation {
                return;
            }
            if let Some(model) = state.rows.as_ref()
                && let Some(mut data) = model.row_data(row)
            {
                data.thumb_state = THUMB_FAILED;
                model.set_row_data(row, data);
            }
        }

        UiUpdate::ViewerLoading {
            image_url,
            page_url,
        } => {
            show_viewer_loading(state, cmd_tx, image_url, page_url);
        }

        UiUpdate::ViewerImage { image } => {
            let state = state.borrow();
            if let Some(viewer) = state.viewer.as_ref() {
                viewer.set_full_image(to_slint_image(&image));
                viewer.set_image_loaded(true);
                viewer.set_can_download(true);
            }
        }

        UiUpdate::ViewerFailed { message } => {
            let state = state.borrow();
            if let Some(viewer) = state.viewer.as_ref() {
                viewer.set_viewer_status(SharedString::from(message));
                viewer.set_image_loaded(false);
                viewer.set_can_download(false);
            }
        }

        UiUpdate::Error { title, message } => {
            ui.set_status_text(SharedString::from(format!("{title}: {message}")));
        }
    }
}

/// Opens (or re-uses) the viewer window in its loading state.
fn show_viewer_loading(
    state: &Rc<RefCell<UiState>>,
    cmd_tx: &mpsc::UnboundedSender<UiCommand>,
    image_url: String,
    page_url: String,
) {
    if state.borrow().viewer.is_none() {
        match ViewerWindow::new() {
            Ok(viewer) => {
                wire_viewer(&viewer, state, cmd_tx);
                state.borrow_mut().viewer = Some(viewer);
            }
            Err(error) => {
                warn!(%error, "failed to create viewer window");
                return;
            }
        }
    }

    let mut state = state.borrow_mut();
    state.viewer_image_url = image_url;
    state.viewer_page_url = page_url;
    let can_learn_more = !state.viewer_page_url.is_empty();

    if let Some(viewer) = state.viewer.as_ref() {
        viewer.set_image_loaded(false);
        viewer.set_can_download(false);
        viewer.set_can_learn_more(can_learn_more);
        viewer.set_viewer_status(SharedString::from("Loading..."));
        if let Err(error) = viewer.show() {
            warn!(%error, "failed to show viewer window");
        }
    }
}

/// Wires the viewer window's buttons. Runs once, when the window is created.
fn wire_viewer(
    viewer: &ViewerWindow,
    state: &Rc<RefCell<UiState>>,
    cmd_tx: &mpsc::UnboundedSender<UiCommand>,
) {
    let learn_state = Rc::clone(state);
    let learn_tx = cmd_tx.clone();
    viewer.on_learn_more_clicked(move || {
        let url = learn_state.borrow().viewer_page_url.clone();
        if !url.is_empty() {
            let _ = learn_tx.send(UiCommand::LearnMore { url });
        }
    });

    let download_state = Rc::clone(state);
    let download_tx = cmd_tx.clone();
    viewer.on_download_clicked(move || {
        let url = download_state.borrow().viewer_image_url.clone();
        if url.is_empty() {
            return;
        }
        let tx = download_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = save_dialog(&url) {
                let _ = tx.send(UiCommand::SaveViewerImage { path });
            }
        });
    });
}

fn to_result_row(data: ResultRowData) -> ResultRow {
    ResultRow {
        title: data.title.into(),
        artist: data.artist.into(),
        date: data.date.into(),
        medium: data.medium.into(),
        classification: data.classification.into(),
        image_url: data.image_url.into(),
        page_url: data.page_url.into(),
        thumbnail: slint::Image::default(),
        thumb_state: if data.has_thumbnail {
            THUMB_LOADING
        } else {
            THUMB_NO_IMAGE
        },
    }
}

fn to_slint_image(pixels: &PixelData) -> slint::Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&pixels.rgba, pixels.width, pixels.height);
    slint::Image::from_rgba8(buffer)
}

/// Internal completions flowing back into the runtime loop.
enum RuntimeEvent {
    SearchFinished {
        generation: u64,
        result: Result<SearchOutcome, ApiError>,
    },
    ViewerLoaded {
        generation: u64,
        result: Result<curio_application::FetchedImage, ImageError>,
    },
}

/// The long-lived services behind the command loop.
struct Services {
    search: Arc<SearchArtworks<HttpCollectionApi>>,
    thumbnails: Arc<FetchThumbnail<HttpImageFetcher>>,
    full_images: Arc<LoadFullImage<HttpImageFetcher>>,
    save_image: SaveImage,
    settings_repo: SettingsRepository,
}

/// Application state managed by the async runtime.
struct AppState {
    settings: UserSettings,
    /// Records of the current search, unsorted and unfiltered.
    records: Vec<ArtworkRecord>,
    /// Display generation; bumped on every search, re-sort and re-filter.
    generation: u64,
    /// Viewer request counter; stale full-image loads are dropped.
    viewer_generation: u64,
    search_token: Option<SearchToken>,
    /// Raw bytes of the image currently in the viewer, for saving.
    viewer_bytes: Option<Vec<u8>>,
}

impl AppState {
    fn from_settings(settings: UserSettings) -> Self {
        Self {
            settings,
            records: Vec::new(),
            generation: 0,
            viewer_generation: 0,
            search_token: None,
            viewer_bytes: None,
        }
    }
}

fn classification_index_of(classification: &str) -> i32 {
    CLASSIFICATION_OPTIONS
        .iter()
        .position(|option| *option == classification)
        .unwrap_or(0) as i32
}

/// Runs the async runtime for searches, image downloads and persistence.
fn run_async_runtime(
    mut cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
    update_tx: mpsc::UnboundedSender<UiUpdate>,
) {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    rt.block_on(async move {
        // Initialize infrastructure
        let api = Arc::new(HttpCollectionApi::new().expect("Failed to create collection API client"));
        let fetcher = Arc::new(HttpImageFetcher::new().expect("Failed to create image fetcher"));
        let services = Services {
            search: Arc::new(SearchArtworks::new(api)),
            thumbnails: Arc::new(FetchThumbnail::new(Arc::clone(&fetcher))),
            full_images: Arc::new(LoadFullImage::new(fetcher)),
            save_image: SaveImage::new(),
            settings_repo: SettingsRepository::new(),
        };

        // Load user settings
        let settings = services.settings_repo.load().await.unwrap_or_else(|error| {
            warn!(%error, "failed to load settings, using defaults");
            UserSettings::default()
        });

        let mut state = AppState::from_settings(settings);

        // Send initial settings to UI
        let _ = update_tx.send(UiUpdate::SettingsLoaded {
            classification_index: classification_index_of(&state.settings.classification),
            has_images: state.settings.has_images,
            order_index: state.settings.sort_order.to_index(),
        });

        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RuntimeEvent>();

        loop {
            tokio::select! {
                Some(cmd) = cmd_rx.recv() => {
                    handle_command(cmd, &mut state, &services, &update_tx, &event_tx).await;
                }
                Some(event) = event_rx.recv() => {
                    handle_event(event, &mut state, &services, &update_tx);
                }
                else => break,
            }
        }
    });
}

async fn handle_command(
    cmd: UiCommand,
    state: &mut AppState,
    services: &Services,
    update_tx: &mpsc::UnboundedSender<UiUpdate>,
    event_tx: &mpsc::UnboundedSender<RuntimeEvent>,
) {
    match cmd {
        UiCommand::Search {
            term,
            classification,
            has_images,
        } => {
            // Only one outstanding search: supersede the previous one.
            if let Some(token) = state.search_token.take() {
                token.cancel();
            }
            let token = SearchToken::new();
            state.search_token = Some(token.clone());
            state.generation += 1;
            state.records.clear();
            let generation = state.generation;

            state.settings.classification = classification.clone();
            state.settings.has_images = has_images;
            persist_settings(services, &state.settings).await;

            let _ = update_tx.send(UiUpdate::Results {
                generation,
                rows: Vec::new(),
            });
            let _ = update_tx.send(UiUpdate::State(SearchState::Loading));

            info!(%term, %classification, has_images, "starting search");

            let search = Arc::clone(&services.search);
            let event_tx = event_tx.clone();
            let query = SearchQuery::new(term, classification, has_images);
            tokio::spawn(async move {
                let result = search.execute(&query, &token).await;
                let _ = event_tx.send(RuntimeEvent::SearchFinished { generation, result });
            });
        }

        UiCommand::OrderChanged { index } => {
            let order = SortOrder::from_index(index);
            if order == state.settings.sort_order {
                return;
            }
            state.settings.sort_order = order;
            persist_settings(services, &state.settings).await;
            if !state.records.is_empty() {
                state.generation += 1;
                refresh_display(state, services, update_tx);
            }
        }

        UiCommand::HasImagesToggled { checked } => {
            if checked == state.settings.has_images {
                return;
            }
            state.settings.has_images = checked;
            persist_settings(services, &state.settings).await;
            if !state.records.is_empty() {
                state.generation += 1;
                refresh_display(state, services, update_tx);
            }
        }

        UiCommand::OpenViewer {
            image_url,
            page_url,
        } => {
            state.viewer_generation += 1;
            state.viewer_bytes = None;
            let generation = state.viewer_generation;

            let _ = update_tx.send(UiUpdate::ViewerLoading {
                image_url: image_url.clone(),
                page_url,
            });

            let full_images = Arc::clone(&services.full_images);
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let result = full_images.execute(&image_url).await;
                let _ = event_tx.send(RuntimeEvent::ViewerLoaded { generation, result });
            });
        }

        UiCommand::LearnMore { url } => {
            info!(%url, "opening object page in browser");
            tokio::spawn(async move {
                match tokio::task::spawn_blocking(move || open::that(&url)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(error)) => warn!(%error, "failed to open browser"),
                    Err(error) => warn!(%error, "browser task failed"),
                }
            });
        }

        UiCommand::DownloadImage { url, path } => {
            let full_images = Arc::clone(&services.full_images);
            let save_image = services.save_image;
            let update_tx = update_tx.clone();
            tokio::spawn(async move {
                let result = async {
                    let fetched = full_images.execute(&url).await?;
                    save_image.execute(&fetched.raw, &path).await
                }
                .await;
                match result {
                    Ok(()) => info!(path = %path.display(), "image saved"),
                    Err(error) => {
                        warn!(%error, "failed to download image");
                        let _ = update_tx.send(UiUpdate::Error {
                            title: "Download Failed".to_string(),
                            message: error.to_string(),
                        });
                    }
                }
            });
        }

        UiCommand::SaveViewerImage { path } => {
            let Some(bytes) = state.viewer_bytes.clone() else {
                warn!("no viewer image to save");
                return;
            };
            let save_image = services.save_image;
            let update_tx = update_tx.clone();
            tokio::spawn(async move {
                match save_image.execute(&bytes, &path).await {
                    Ok(()) => info!(path = %path.display(), "image saved"),
                    Err(error) => {
                        warn!(%error, "failed to save image");
                        let _ = update_tx.send(UiUpdate::Error {
                            title: "Save Failed".to_string(),
                            message: error.to_string(),
                        });
                    }
                }
            });
        }
    }
}

fn handle_event(
    event: RuntimeEvent,
    state: &mut AppState,
    services: &Services,
    update_tx: &mpsc::UnboundedSender<UiUpdate>,
) {
    match event {
        RuntimeEvent::SearchFinished { generation, result } => {
            if generation != state.generation {
                return; // superseded by a newer search
            }
            match result {
                Ok(SearchOutcome::Results(records)) => {
                    info!(count = records.len(), "search finished");
                    state.records = records;
                    refresh_display(state, services, update_tx);
                }
                Ok(SearchOutcome::Empty) => {
                    state.records.clear();
                    let _ = update_tx.send(UiUpdate::State(SearchState::Empty));
                }
                Ok(SearchOutcome::Cancelled) => {}
                Err(error) => {
                    state.records.clear();
                    warn!(%error, "search failed");
                    let kind = SearchErrorKind::from(&error);
                    let _ = update_tx.send(UiUpdate::State(SearchState::failed(
                        kind,
                        error.to_string(),
                    )));
                }
            }
        }

        RuntimeEvent::ViewerLoaded { generation, result } => {
            if generation != state.viewer_generation {
                return; // the viewer moved on to another image
            }
            match result {
                Ok(fetched) => {
                    let _ = update_tx.send(UiUpdate::ViewerImage {
                        image: PixelData::from(fetched.decoded),
                    });
                    state.viewer_bytes = Some(fetched.raw);
                }
                Err(error) => {
                    warn!(%error, "failed to load full image");
                    let _ = update_tx.send(UiUpdate::ViewerFailed {
                        message: "Failed to load image".to_string(),
                    });
                }
            }
        }
    }
}

/// Re-derives the displayed rows from the current records and settings,
/// then starts one fire-and-forget thumbnail download per visible row.
fn refresh_display(
    state: &AppState,
    services: &Services,
    update_tx: &mpsc::UnboundedSender<UiUpdate>,
) {
    let generation = state.generation;
    let mut displayed = displayable(&state.records, state.settings.has_images);
    sort_by_date(&mut displayed, state.settings.sort_order);

    if displayed.is_empty() {
        let _ = update_tx.send(UiUpdate::Results {
            generation,
            rows: Vec::new(),
        });
        let _ = update_tx.send(UiUpdate::State(SearchState::Empty));
        return;
    }

    let rows: Vec<ResultRowData> = displayed.iter().map(ResultRowData::from_record).collect();
    let _ = update_tx.send(UiUpdate::Results { generation, rows });
    let _ = update_tx.send(UiUpdate::State(SearchState::Loaded {
        count: displayed.len(),
    }));

    for (row, record) in displayed.iter().enumerate() {
        let Some(url) = record.thumbnail_url() else {
            continue;
        };
        let url = url.to_string();
        let thumbnails = Arc::clone(&services.thumbnails);
        let update_tx = update_tx.clone();
        tokio::spawn(async move {
            match thumbnails.execute(&url).await {
                Ok(image) => {
                    let _ = update_tx.send(UiUpdate::Thumbnail {
                        generation,
                        row,
                        image: PixelData::from(image),
                    });
                }
                Err(error) => {
                    debug!(%error, row, "thumbnail failed to load");
                    let _ = update_tx.send(UiUpdate::ThumbnailFailed { generation, row });
                }
            }
        });
    }
}

async fn persist_settings(services: &Services, settings: &UserSettings) {
    if let Err(error) = services.settings_repo.save(settings).await {
        warn!(%error, "failed to persist settings");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classification_lookup_round_trips() {
        let index = classification_index_of("Paintings");
        assert_eq!(classification_at(index), "Paintings");
    }

    #[test]
    fn unknown_classification_maps_to_any() {
        assert_eq!(classification_index_of("Not A Real Label"), 0);
        assert_eq!(classification_at(0), "");
        assert_eq!(classification_at(-3), "");
        assert_eq!(classification_at(10_000), "");
    }
}
