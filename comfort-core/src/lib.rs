//! Core comfort engine for RoomComfort
//!
//! Estimates thermal/visual comfort across the fixed positions of a room from
//! crowd-sourced readings (illuminance plus a subjective 1-5 temperature rating)
//! and ranks positions for a given time slot.
//!
//! The crate is layered leaves first:
//! - [`grid`]: positions and the linear id <-> (column, row) bijection
//! - [`influence`]: distance-weighted effect of active climate-control sources
//! - [`scorer`]: bounded comfort score and category for one reading
//! - [`store`]: last-write-wins reading storage keyed by (position, time slot)
//! - [`ranking`]: ordered recommendations for a time slot
//! - [`engine`]: the request/response facade used by presentation layers
//!
//! ```
//! use comfort_core::{ComfortEngine, ComfortCategory, FixedClock, Position, RoomConfig};
//! use chrono::{TimeZone, Utc};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap());
//! let mut engine = ComfortEngine::with_clock(RoomConfig::classroom(), clock)?;
//!
//! engine.submit_reading(Position::new(0, 2), "10:00", 500.0, 3, None)?;
//!
//! let assessment = engine.score_and_color(Position::new(0, 2), "10:00")?;
//! assert!(assessment.score.is_some());
//!
//! let empty = engine.score_and_color(Position::new(5, 4), "10:00")?;
//! assert_eq!(empty.category, ComfortCategory::NoData);
//! # Ok::<(), comfort_core::ComfortError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod grid;
pub mod influence;
pub mod ranking;
pub mod reading;
pub mod scorer;
pub mod store;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use config::{ControlSourceConfig, RoomConfig, RoomConfigBuilder};
pub use engine::{CellAssessment, ComfortEngine};
pub use errors::{ComfortError, ComfortResult};
pub use grid::{Grid, Position, PositionId};
pub use influence::{ControlSource, InfluenceConfig, InfluenceModel};
pub use ranking::{RankingEngine, Recommendation};
pub use reading::{Reading, TempRating};
pub use scorer::{Assessment, ComfortCategory, ComfortScorer, ScoreBreakdown, ScoringConfig};
pub use store::{ReadingStore, StoreStats};
pub use time::{FixedClock, TimeSlot, TimeSlotSchedule, TimeSource, Timestamp};
pub use traits::Validator;
pub use validators::ReadingValidator;

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
