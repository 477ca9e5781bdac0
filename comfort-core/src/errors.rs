//! Error Types for Rejected Input
//!
//! ## Error Taxonomy
//!
//! Every core operation is total and deterministic given valid input, so the
//! only failures are input problems. They fall into two groups:
//!
//! ### Invalid input (request time)
//! - `NegativeIlluminance`, `InvalidValue`: the light reading is not a usable lux value
//! - `TempRatingOutOfRange`: the subjective rating is outside the 1-5 scale
//! - `UnknownPosition`, `UnknownPositionId`: the position is not on the grid
//! - `UnknownControlSource`: no climate-control source has that id
//! - `UnknownTimeSlot`: the label is not part of the session's schedule
//!
//! Values are rejected, never clamped. Clamping a rating of 7 down to 5 would
//! silently change the comfort score a position receives.
//!
//! ### Invalid configuration (construction time)
//! - `InvalidConfig`: grid, weights, time slots or sources do not form a usable room
//!
//! ## Absence Is Not an Error
//!
//! A position without a reading for a time slot is a normal state. It is
//! reported as [`ComfortCategory::NoData`](crate::scorer::ComfortCategory::NoData)
//! and excluded from rankings; no variant here represents it.
//!
//! ```rust
//! use comfort_core::{ComfortEngine, ComfortError, Position, RoomConfig};
//!
//! let mut engine = ComfortEngine::new(RoomConfig::classroom())?;
//!
//! match engine.submit_reading(Position::new(0, 0), "10:00", -3.0, 3, None) {
//!     Err(ComfortError::NegativeIlluminance { .. }) => {
//!         // ask the user to measure again
//!     }
//!     Err(e) if e.is_invalid_input() => {
//!         // any other rejected field
//!     }
//!     _ => {}
//! }
//! # Ok::<(), ComfortError>(())
//! ```

use alloc::string::String;

use thiserror_no_std::Error;

/// Result type for comfort operations
pub type ComfortResult<T> = Result<T, ComfortError>;

/// Errors raised by the comfort engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComfortError {
    /// Illuminance below zero lux
    #[error("Illuminance {value} lux is negative")]
    NegativeIlluminance {
        /// The rejected reading in lux
        value: f64,
    },

    /// Number is NaN or infinite
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Subjective temperature rating outside the rating scale
    #[error("Temperature rating {value} outside range [{min}, {max}]")]
    TempRatingOutOfRange {
        /// The rejected rating
        value: i64,
        /// Lowest accepted rating
        min: u8,
        /// Highest accepted rating
        max: u8,
    },

    /// Coordinate pair outside the grid
    #[error("Position ({column}, {row}) is outside the grid")]
    UnknownPosition {
        /// Requested column
        column: u16,
        /// Requested row
        row: u16,
    },

    /// Linear position id outside `1..=W*H`
    #[error("Position id {id} is outside the grid")]
    UnknownPositionId {
        /// Requested id
        id: u32,
    },

    /// No control source with this id
    #[error("Unknown control source {id}")]
    UnknownControlSource {
        /// Requested source id
        id: u32,
    },

    /// Time slot label not in the schedule
    #[error("Unknown time slot '{label}'")]
    UnknownTimeSlot {
        /// Requested label
        label: String,
    },

    /// Room configuration cannot be used
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: &'static str,
    },
}

impl ComfortError {
    /// True for request-time input rejections (the `InvalidInput` class)
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, ComfortError::InvalidConfig { .. })
    }

    /// True when the error names something that does not exist
    /// (position, control source or time slot) rather than a bad value
    pub fn is_unknown_resource(&self) -> bool {
        matches!(
            self,
            ComfortError::UnknownPosition { .. }
                | ComfortError::UnknownPositionId { .. }
                | ComfortError::UnknownControlSource { .. }
                | ComfortError::UnknownTimeSlot { .. }
        )
    }
}
