//! Room configuration documents
//!
//! A room document is the JSON form of [`RoomConfig`]. Omitted `scoring`,
//! `influence` and `control_sources` sections fall back to their defaults;
//! every document is validated before it is handed out.

use std::fs;
use std::path::Path;

use comfort_core::RoomConfig;

use crate::SchemaError;

/// The reference classroom document
pub const CLASSROOM_JSON: &str = include_str!("../schemas/classroom.json");

/// Parse and validate a room document
pub fn from_json_str(json: &str) -> Result<RoomConfig, SchemaError> {
    let config: RoomConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a room document from disk
pub fn from_path(path: impl AsRef<Path>) -> Result<RoomConfig, SchemaError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_json_str(&json)
}

/// The embedded reference classroom
pub fn classroom() -> Result<RoomConfig, SchemaError> {
    from_json_str(CLASSROOM_JSON)
}

/// Pretty-printed room document
pub fn to_json_string(config: &RoomConfig) -> Result<String, SchemaError> {
    Ok(serde_json::to_string_pretty(config)?)
}
