//! JSON serialization helpers for deterministic output.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Serializes a value to deterministic JSON bytes.
///
/// Same as `to_json_stable` but returns bytes for direct file writing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let json = to_json_stable(value)?;
    Ok(json.into_bytes())
}

/// Deserializes JSON from a string.
///
/// Handles both pretty-printed and minified JSON.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(SerializationError::Deserialize)
}

/// Deserializes JSON from bytes.
///
/// Handles both pretty-printed and minified JSON.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
mod tests {
    use curio_domain::UserSettings;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stable_serialization_has_trailing_newline_and_indent() {
        let json = to_json_stable(&UserSettings::default()).unwrap();
        assert!(json.ends_with('\n'));
        assert!(json.contains("  \"classification\""));
    }

    #[test]
    fn round_trip() {
        let settings = UserSettings {
            classification: "Jade".to_string(),
            ..UserSettings::default()
        };

        let json = to_json_stable(&settings).unwrap();
        let restored: UserSettings = from_json(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn from_json_bytes_matches_from_json() {
        let json = to_json_stable(&UserSettings::default()).unwrap();
        let a: UserSettings = from_json(&json).unwrap();
        let b: UserSettings = from_json_bytes(json.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result: Result<UserSettings, _> = from_json("{not json");
        assert!(result.is_err());
    }
}
