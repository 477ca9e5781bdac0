//! JSON Wire Records and Room Documents for RoomComfort
//!
//! ## Overview
//!
//! The core engine only deals in typed values. Everything that crosses a
//! process boundary goes through this crate:
//!
//! - [`records`]: request and response bodies of the HTTP surface
//! - [`archive`]: a versioned export of every stored reading, for an external
//!   persistence collaborator
//! - [`room`]: room configuration documents, with the reference classroom
//!   embedded as a resource
//!
//! ## Record Conventions
//!
//! - Field names are camelCase on the wire (`tempRating`, `timeSlot`)
//! - Positions travel as both the seat number and its coordinates
//! - Timestamps are RFC 3339 strings in UTC with millisecond precision
//! - Categories travel as their kebab-case name next to a colour hint
//!
//! ```json
//! {
//!   "position": 6,
//!   "column": 1,
//!   "row": 0,
//!   "timeSlot": "10:00",
//!   "illuminance": 520.0,
//!   "tempRating": 4,
//!   "comment": "right under the AC",
//!   "timestamp": "2024-06-03T10:02:11.000Z"
//! }
//! ```
//!
//! ## Archive Evolution
//!
//! Archives carry a `schemaVersion`. New fields are appended with defaults so
//! older archives keep decoding; a version this crate does not know is
//! rejected rather than guessed at.
//!
//! ## Usage Example
//!
//! ```rust
//! use comfort_core::{ComfortEngine, Position};
//! use comfort_schemas::{archive, room};
//!
//! let mut engine = ComfortEngine::new(room::classroom()?)?;
//! engine.submit_reading(Position::new(2, 3), "11:00", 430.0, 3, None)?;
//!
//! let json = archive::encode_readings(&engine)?;
//!
//! let mut restored = ComfortEngine::new(room::classroom()?)?;
//! let count = archive::restore_readings(&mut restored, &archive::decode_readings(&json)?)?;
//! assert_eq!(count, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use comfort_core::ComfortError;

pub mod archive;
pub mod records;
pub mod room;

pub use archive::{decode_readings, encode_readings, restore_readings, ReadingArchive};
pub use records::{
    AssessmentResponse, ControlSourceRecord, ControlSourceStateRequest, GridResponse,
    ReadingRecord, RecommendationResponse, StatsResponse, SubmitReadingRequest,
};

/// Wire format and document errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Malformed or mistyped JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Timestamp that is not RFC 3339
    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        /// The rejected text
        value: String,
        /// Parser diagnosis
        #[source]
        source: chrono::ParseError,
    },

    /// Record contents rejected by the core
    #[error(transparent)]
    Comfort(#[from] ComfortError),

    /// Seat number and coordinates of a record disagree
    #[error("Seat {id} is not at ({column}, {row})")]
    InconsistentPosition {
        /// Seat number in the record
        id: u32,
        /// Column in the record
        column: u16,
        /// Row in the record
        row: u16,
    },

    /// Archive written by an unknown format revision
    #[error("Unsupported archive version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version found in the archive
        found: u32,
        /// Version this crate writes
        expected: u32,
    },

    /// Room document could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the document
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
