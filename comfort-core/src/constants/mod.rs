//! Constants for RoomComfort Core
//!
//! Centralised numeric defaults used by the scorer, the influence model and
//! the default classroom configuration. Every value carries its unit in the
//! name where one applies.
//!
//! ## Organization
//!
//! - **Comfort**: scoring optima, weights, category thresholds, influence defaults
//! - **Grid**: the classroom layout, its time slots and climate-control placement

/// Scoring and influence defaults.
pub mod comfort;

/// Default room layout and session schedule.
pub mod grid;

pub use comfort::{
    OPTIMAL_ILLUMINANCE_LUX, OPTIMAL_TEMP_RATING,
    LIGHT_WEIGHT, TEMP_WEIGHT, WEIGHT_SUM_TOLERANCE,
    INFLUENCE_COEFFICIENT, INFLUENCE_DISTANCE_FLOOR,
    TEMP_RATING_MIN, TEMP_RATING_MAX,
    EXCELLENT_THRESHOLD, GOOD_THRESHOLD, FAIR_THRESHOLD,
    SCORE_MIN, SCORE_MAX, DEFAULT_TOP_N,
};

pub use grid::{
    CLASSROOM_COLUMNS, CLASSROOM_ROWS, CLASSROOM_TIME_SLOTS,
    CLASSROOM_CONTROL_SOURCES,
};
