//! Deterministic JSON serialization for files Curio writes.
//!
//! Ensures stable settings files by:
//! - Using 2-space indentation
//! - Adding a trailing newline
//! - UTF-8 encoding without BOM

mod json;

pub use json::*;
