//! Comfort scorer: one reading in, one bounded score out
//!
//! ## Algorithm
//!
//! ```text
//! effective_temp = rating - influence(position)
//! light_error    = |optimal_lux - lux| / optimal_lux
//! temp_error     = |optimal_temp - effective_temp| / optimal_temp
//! score          = clamp(100 - (w_light * light_error + w_temp * temp_error) * 100, 0, 100)
//! ```
//!
//! With weights summing to one, a reading at both optima scores exactly 100
//! and arbitrarily large deviations saturate at 0.
//!
//! The light term is unbounded above: a desk in direct sun at 5000 lux has a
//! relative error of 9 before the clamp, while the temperature term stays
//! small because the rating scale is narrow. The clamp is applied only
//! after both terms are combined, so one extreme term can zero the score on
//! its own.
//!
//! ## Categories
//!
//! | Score     | Category    | Colour |
//! |-----------|-------------|--------|
//! | >= 80     | `excellent` | green  |
//! | 60 - < 80 | `good`      | yellow |
//! | 40 - < 60 | `fair`      | orange |
//! | < 40      | `poor`      | red    |
//! | no reading| `no-data`   | gray   |
//!
//! `no-data` is never scored and never confused with `poor`.

use core::fmt;

use crate::{
    constants::{
        EXCELLENT_THRESHOLD, FAIR_THRESHOLD, GOOD_THRESHOLD, LIGHT_WEIGHT,
        OPTIMAL_ILLUMINANCE_LUX, OPTIMAL_TEMP_RATING, SCORE_MAX, SCORE_MIN, TEMP_WEIGHT,
        WEIGHT_SUM_TOLERANCE,
    },
    errors::{ComfortError, ComfortResult},
    grid::Position,
    influence::{ControlSource, InfluenceModel},
    reading::Reading,
    traits::Validatable,
};

/// Targets and weights of the comfort score
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// Illuminance that scores no light error (lux)
    pub optimal_illuminance_lux: f64,
    /// Effective temperature that scores no temperature error
    pub optimal_temp_rating: f64,
    /// Weight of the light error
    pub light_weight: f64,
    /// Weight of the temperature error
    pub temp_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            optimal_illuminance_lux: OPTIMAL_ILLUMINANCE_LUX,
            optimal_temp_rating: OPTIMAL_TEMP_RATING,
            light_weight: LIGHT_WEIGHT,
            temp_weight: TEMP_WEIGHT,
        }
    }
}

impl ScoringConfig {
    /// Check optima and weights
    pub fn validate(&self) -> ComfortResult<()> {
        let values = [
            self.optimal_illuminance_lux,
            self.optimal_temp_rating,
            self.light_weight,
            self.temp_weight,
        ];
        if values.iter().any(|value| !value.is_valid()) {
            return Err(ComfortError::InvalidConfig {
                reason: "scoring parameters must be finite",
            });
        }
        if self.optimal_illuminance_lux <= 0.0 || self.optimal_temp_rating <= 0.0 {
            return Err(ComfortError::InvalidConfig {
                reason: "scoring optima must be positive",
            });
        }
        if self.light_weight < 0.0 || self.temp_weight < 0.0 {
            return Err(ComfortError::InvalidConfig {
                reason: "scoring weights must not be negative",
            });
        }
        if libm::fabs(self.light_weight + self.temp_weight - 1.0) > WEIGHT_SUM_TOLERANCE {
            return Err(ComfortError::InvalidConfig {
                reason: "scoring weights must sum to 1.0",
            });
        }
        Ok(())
    }
}

/// Comfort category of a position for a time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ComfortCategory {
    /// Score of 80 or more
    Excellent,
    /// Score from 60 up to 80
    Good,
    /// Score from 40 up to 60
    Fair,
    /// Score below 40
    Poor,
    /// No reading recorded
    NoData,
}

impl ComfortCategory {
    /// Category of a scored position
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            ComfortCategory::Excellent
        } else if score >= GOOD_THRESHOLD {
            ComfortCategory::Good
        } else if score >= FAIR_THRESHOLD {
            ComfortCategory::Fair
        } else {
            ComfortCategory::Poor
        }
    }

    /// Stable lowercase name
    pub const fn as_str(&self) -> &'static str {
        match self {
            ComfortCategory::Excellent => "excellent",
            ComfortCategory::Good => "good",
            ComfortCategory::Fair => "fair",
            ComfortCategory::Poor => "poor",
            ComfortCategory::NoData => "no-data",
        }
    }

    /// Presentation colour hint for heat maps
    pub const fn color(&self) -> &'static str {
        match self {
            ComfortCategory::Excellent => "green",
            ComfortCategory::Good => "yellow",
            ComfortCategory::Fair => "orange",
            ComfortCategory::Poor => "red",
            ComfortCategory::NoData => "gray",
        }
    }
}

impl fmt::Display for ComfortCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score plus category; `score` is `None` exactly when the category is `NoData`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assessment {
    /// Comfort score in [0, 100]
    pub score: Option<f64>,
    /// Category derived from the score
    pub category: ComfortCategory,
}

impl Assessment {
    /// Assessment of a scored position
    pub fn scored(score: f64) -> Self {
        Self {
            score: Some(score),
            category: ComfortCategory::from_score(score),
        }
    }

    /// Assessment of a position without a reading
    pub const fn no_data() -> Self {
        Self {
            score: None,
            category: ComfortCategory::NoData,
        }
    }
}

/// Intermediate terms of one score, for explanations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreBreakdown {
    /// Total source influence at the position
    pub influence: f64,
    /// Rating after subtracting the influence
    pub effective_temp: f64,
    /// Relative illuminance deviation (unbounded above)
    pub light_error: f64,
    /// Relative temperature deviation
    pub temp_error: f64,
    /// Final clamped score
    pub score: f64,
}

/// Comfort scorer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComfortScorer {
    config: ScoringConfig,
    influence: InfluenceModel,
}

impl ComfortScorer {
    /// Scorer with validated parameters
    pub fn new(config: ScoringConfig, influence: InfluenceModel) -> ComfortResult<Self> {
        config.validate()?;
        Ok(Self { config, influence })
    }

    /// Scoring parameters in use
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Influence model in use
    pub fn influence_model(&self) -> &InfluenceModel {
        &self.influence
    }

    /// All terms of the score for `reading` at `position`
    pub fn breakdown(
        &self,
        position: Position,
        reading: &Reading,
        sources: &[ControlSource],
    ) -> ScoreBreakdown {
        let cfg = &self.config;
        let influence = self.influence.influence(sources, position);
        let effective_temp = reading.temp_rating.as_f64() - influence;

        let light_error = libm::fabs(cfg.optimal_illuminance_lux - reading.illuminance_lux)
            / cfg.optimal_illuminance_lux;
        let temp_error =
            libm::fabs(cfg.optimal_temp_rating - effective_temp) / cfg.optimal_temp_rating;

        let raw = SCORE_MAX - (cfg.light_weight * light_error + cfg.temp_weight * temp_error) * 100.0;

        ScoreBreakdown {
            influence,
            effective_temp,
            light_error,
            temp_error,
            score: raw.clamp(SCORE_MIN, SCORE_MAX),
        }
    }

    /// Comfort score in [0, 100]
    pub fn score(&self, position: Position, reading: &Reading, sources: &[ControlSource]) -> f64 {
        self.breakdown(position, reading, sources).score
    }

    /// Score and category, or `NoData` without a reading
    pub fn assess(
        &self,
        position: Position,
        reading: Option<&Reading>,
        sources: &[ControlSource],
    ) -> Assessment {
        match reading {
            Some(reading) => Assessment::scored(self.score(position, reading, sources)),
            None => Assessment::no_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::influence::InfluenceConfig;
    use chrono::{TimeZone, Utc};

    fn reading(lux: f64, rating: i64) -> Reading {
        let at = Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap();
        Reading::new(lux, rating, None, at).unwrap()
    }

    fn active_source(column: u16, row: u16) -> ControlSource {
        let mut source = ControlSource::new(1, Position::new(column, row));
        source.set_active(true, Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap());
        source
    }

    #[test]
    fn optimal_reading_scores_100() {
        let scorer = ComfortScorer::default();
        let score = scorer.score(Position::new(3, 3), &reading(500.0, 3), &[]);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn self_influence_costs_ten_points() {
        let scorer = ComfortScorer::default();
        let sources = [active_source(1, 0)];
        let breakdown = scorer.breakdown(Position::new(1, 0), &reading(500.0, 3), &sources);

        assert!((breakdown.influence - 0.5).abs() < 1e-12);
        assert!((breakdown.effective_temp - 2.5).abs() < 1e-12);
        assert!((breakdown.temp_error - 1.0 / 6.0).abs() < 1e-12);
        assert!((breakdown.score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn extreme_light_saturates_at_zero() {
        let scorer = ComfortScorer::default();
        let breakdown = scorer.breakdown(Position::new(0, 0), &reading(50_000.0, 3), &[]);
        assert!(breakdown.light_error > 90.0);
        assert_eq!(breakdown.score, 0.0);
    }

    #[test]
    fn darkness_and_heat_combine() {
        let scorer = ComfortScorer::default();
        // light_error = 1.0, temp_error = 2/3
        let score = scorer.score(Position::new(0, 0), &reading(0.0, 5), &[]);
        assert!((score - 20.0).abs() < 1e-9);
    }

    #[test]
    fn category_boundaries() {
        assert_eq!(ComfortCategory::from_score(100.0), ComfortCategory::Excellent);
        assert_eq!(ComfortCategory::from_score(80.0), ComfortCategory::Excellent);
        assert_eq!(ComfortCategory::from_score(79.99), ComfortCategory::Good);
        assert_eq!(ComfortCategory::from_score(60.0), ComfortCategory::Good);
        assert_eq!(ComfortCategory::from_score(59.9), ComfortCategory::Fair);
        assert_eq!(ComfortCategory::from_score(40.0), ComfortCategory::Fair);
        assert_eq!(ComfortCategory::from_score(39.9), ComfortCategory::Poor);
        assert_eq!(ComfortCategory::from_score(0.0), ComfortCategory::Poor);
    }

    #[test]
    fn missing_reading_is_no_data() {
        let scorer = ComfortScorer::default();
        let assessment = scorer.assess(Position::new(0, 0), None, &[]);
        assert_eq!(assessment, Assessment::no_data());
        assert_eq!(assessment.category.as_str(), "no-data");
        assert_eq!(assessment.category.color(), "gray");
    }

    #[test]
    fn weights_must_sum_to_one() {
        let config = ScoringConfig {
            light_weight: 0.5,
            temp_weight: 0.6,
            ..ScoringConfig::default()
        };
        assert!(ComfortScorer::new(config, InfluenceModel::default()).is_err());

        let config = ScoringConfig {
            light_weight: 0.3,
            temp_weight: 0.7,
            ..ScoringConfig::default()
        };
        assert!(ComfortScorer::new(config, InfluenceModel::default()).is_ok());
    }

    #[test]
    fn stronger_coefficient_lowers_score_near_source() {
        let strong = InfluenceModel::new(InfluenceConfig {
            coefficient: 1.5,
            distance_floor: 1.0,
        })
        .unwrap();
        let scorer = ComfortScorer::new(ScoringConfig::default(), strong).unwrap();
        let sources = [active_source(1, 0)];
        // effective temp 1.5 -> temp_error 0.5 -> 100 - 30
        let score = scorer.score(Position::new(1, 0), &reading(500.0, 3), &sources);
        assert!((score - 70.0).abs() < 1e-9);
    }
}
