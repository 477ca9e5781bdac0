//! Comfort Scoring Constants
//!
//! Optima and weights used to turn a reading into a score in [0, 100], and
//! the thresholds that turn a score into a category.

// ===== OPTIMA =====

/// Target illuminance for desk work (lux).
///
/// Typical recommendation for classrooms and offices; deviations are
/// measured relative to this value.
pub const OPTIMAL_ILLUMINANCE_LUX: f64 = 500.0;

/// Target effective temperature on the subjective scale.
///
/// 3 is the neutral point of the 1-5 rating ("neither warm nor cold").
pub const OPTIMAL_TEMP_RATING: f64 = 3.0;

// ===== RATING SCALE =====

/// Lowest subjective temperature rating ("cold").
pub const TEMP_RATING_MIN: u8 = 1;

/// Highest subjective temperature rating ("hot").
pub const TEMP_RATING_MAX: u8 = 5;

// ===== WEIGHTS =====

/// Weight of the relative illuminance error.
pub const LIGHT_WEIGHT: f64 = 0.4;

/// Weight of the relative temperature error.
///
/// Together with [`LIGHT_WEIGHT`] must sum to 1.0, otherwise a reading at
/// both optima would not score exactly 100.
pub const TEMP_WEIGHT: f64 = 0.6;

/// Accepted deviation of `LIGHT_WEIGHT + TEMP_WEIGHT` from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

// ===== INFLUENCE =====

/// Effect coefficient `k` of a climate-control source.
///
/// Contribution of one active source is `k / (distance + c)` in rating units.
pub const INFLUENCE_COEFFICIENT: f64 = 0.5;

/// Minimum-distance floor `c` (grid cells).
///
/// Keeps the contribution finite for a position coincident with a source.
pub const INFLUENCE_DISTANCE_FLOOR: f64 = 1.0;

// ===== SCORE RANGE AND CATEGORIES =====

/// Lowest possible score.
pub const SCORE_MIN: f64 = 0.0;

/// Highest possible score.
pub const SCORE_MAX: f64 = 100.0;

/// Scores at or above this are "excellent".
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

/// Scores at or above this (and below excellent) are "good".
pub const GOOD_THRESHOLD: f64 = 60.0;

/// Scores at or above this (and below good) are "fair"; anything lower is "poor".
pub const FAIR_THRESHOLD: f64 = 40.0;

/// Number of recommendations a presentation layer shows by default.
pub const DEFAULT_TOP_N: usize = 5;
