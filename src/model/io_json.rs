//! JSON serialization for boxdiff entities and deltas.
//!
//! Boxes, images, and image sets are stored as plain JSON objects using the
//! struct field names. Identifiers are written as numbers (integers) or
//! strings (UUIDs and opaque strings), and decoded with integer taking
//! priority, then UUID, then string.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::BoxdiffError;

/// Reads a value from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, BoxdiffError> {
    let file = File::open(path).map_err(BoxdiffError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| BoxdiffError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a value to a JSON file (pretty-printed).
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BoxdiffError> {
    let file = File::create(path).map_err(BoxdiffError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(|source| BoxdiffError::JsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a value from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes a value to a pretty-printed JSON string.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
