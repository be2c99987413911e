//! Curio Domain - Core business types
//!
//! This crate defines the domain model for the Curio collection explorer.
//! All types here are pure Rust with no I/O dependencies.

pub mod artwork;
pub mod catalog;
pub mod config;
pub mod query;
pub mod settings;
pub mod state;

pub use artwork::{ArtworkRecord, displayable, image_file_name, sort_by_date};
pub use catalog::CLASSIFICATION_OPTIONS;
pub use query::SearchQuery;
pub use settings::{SortOrder, UserSettings};
pub use state::{SearchErrorKind, SearchState};
