//! Room configuration
//!
//! Everything that was fixed at startup in a single-classroom deployment is
//! data here: grid size, the session's time slots, where the climate-control
//! sources sit, and the scoring and influence parameters.
//!
//! ```rust
//! use comfort_core::{ControlSourceConfig, RoomConfig};
//!
//! let config = RoomConfig::builder()
//!     .grid(8, 4)
//!     .time_slots(["08:00", "12:00", "16:00"])
//!     .control_source(ControlSourceConfig::cooling(1, 0, 0))
//!     .control_source(ControlSourceConfig::heating(2, 7, 3).inactive())
//!     .weights(0.5, 0.5)
//!     .build()?;
//!
//! assert_eq!(config.columns, 8);
//! # Ok::<(), comfort_core::ComfortError>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    constants::{CLASSROOM_COLUMNS, CLASSROOM_CONTROL_SOURCES, CLASSROOM_ROWS, CLASSROOM_TIME_SLOTS},
    errors::{ComfortError, ComfortResult},
    grid::{Grid, Position},
    influence::{InfluenceConfig, COOLING_EFFECT, HEATING_EFFECT},
    scorer::ScoringConfig,
    time::TimeSlotSchedule,
    traits::Validatable,
};

#[cfg(feature = "serde")]
fn default_active() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_effect() -> f64 {
    COOLING_EFFECT
}

/// Initial placement and state of one climate-control source
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlSourceConfig {
    /// Operator-facing identifier, unique within the room
    pub id: u32,
    /// Column of the source
    pub column: u16,
    /// Row of the source
    pub row: u16,
    /// Whether the source starts switched on
    #[cfg_attr(feature = "serde", serde(default = "default_active"))]
    pub active: bool,
    /// Signed effect magnitude (`1.0` cooling, negative for heating)
    #[cfg_attr(feature = "serde", serde(default = "default_effect"))]
    pub effect: f64,
}

impl ControlSourceConfig {
    /// Active cooling source
    pub fn cooling(id: u32, column: u16, row: u16) -> Self {
        Self {
            id,
            column,
            row,
            active: true,
            effect: COOLING_EFFECT,
        }
    }

    /// Active heating source
    pub fn heating(id: u32, column: u16, row: u16) -> Self {
        Self {
            effect: HEATING_EFFECT,
            ..Self::cooling(id, column, row)
        }
    }

    /// Same source, starting switched off
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Grid position of the source
    pub fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }
}

/// Complete description of one room session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomConfig {
    /// Number of columns (W)
    pub columns: u16,
    /// Number of rows (H)
    pub rows: u16,
    /// Time-slot labels in presentation order
    pub time_slots: Vec<String>,
    /// Climate-control sources
    #[cfg_attr(feature = "serde", serde(default))]
    pub control_sources: Vec<ControlSourceConfig>,
    /// Scoring targets and weights
    #[cfg_attr(feature = "serde", serde(default))]
    pub scoring: ScoringConfig,
    /// Influence parameters
    #[cfg_attr(feature = "serde", serde(default))]
    pub influence: InfluenceConfig,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self::classroom()
    }
}

impl RoomConfig {
    /// The reference 6 x 5 classroom with two air conditioners
    pub fn classroom() -> Self {
        Self {
            columns: CLASSROOM_COLUMNS,
            rows: CLASSROOM_ROWS,
            time_slots: CLASSROOM_TIME_SLOTS.iter().map(|label| String::from(*label)).collect(),
            control_sources: CLASSROOM_CONTROL_SOURCES
                .iter()
                .map(|&(id, column, row)| ControlSourceConfig::cooling(id, column, row))
                .collect(),
            scoring: ScoringConfig::default(),
            influence: InfluenceConfig::default(),
        }
    }

    /// Start a builder with classroom grid and slots and no sources
    pub fn builder() -> RoomConfigBuilder {
        RoomConfigBuilder::new()
    }

    /// Check that the configuration describes a usable room
    pub fn validate(&self) -> ComfortResult<()> {
        let grid = Grid::new(self.columns, self.rows)?;
        TimeSlotSchedule::new(self.time_slots.iter().cloned())?;
        self.scoring.validate()?;
        self.influence.validate()?;

        for (index, source) in self.control_sources.iter().enumerate() {
            if !grid.contains(source.position()) {
                return Err(ComfortError::InvalidConfig {
                    reason: "control source lies outside the grid",
                });
            }
            if !source.effect.is_valid() {
                return Err(ComfortError::InvalidConfig {
                    reason: "control source effect must be finite",
                });
            }
            if self.control_sources[..index].iter().any(|other| other.id == source.id) {
                return Err(ComfortError::InvalidConfig {
                    reason: "duplicate control source id",
                });
            }
        }

        Ok(())
    }
}

/// Fluent construction of a [`RoomConfig`]
#[derive(Debug, Clone)]
pub struct RoomConfigBuilder {
    config: RoomConfig,
}

impl Default for RoomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomConfigBuilder {
    /// Classroom grid and slots, default scoring, no sources
    pub fn new() -> Self {
        let mut config = RoomConfig::classroom();
        config.control_sources.clear();
        Self { config }
    }

    /// Grid size
    pub fn grid(mut self, columns: u16, rows: u16) -> Self {
        self.config.columns = columns;
        self.config.rows = rows;
        self
    }

    /// Replace the time slots
    pub fn time_slots<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.time_slots = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Add a control source
    pub fn control_source(mut self, source: ControlSourceConfig) -> Self {
        self.config.control_sources.push(source);
        self
    }

    /// Replace all scoring parameters
    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Light and temperature weights
    pub fn weights(mut self, light: f64, temp: f64) -> Self {
        self.config.scoring.light_weight = light;
        self.config.scoring.temp_weight = temp;
        self
    }

    /// Influence coefficient `k` and distance floor `c`
    pub fn influence(mut self, coefficient: f64, distance_floor: f64) -> Self {
        self.config.influence = InfluenceConfig {
            coefficient,
            distance_floor,
        };
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> ComfortResult<RoomConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classroom_matches_reference_layout() {
        let config = RoomConfig::classroom();
        assert_eq!((config.columns, config.rows), (6, 5));
        assert_eq!(config.time_slots.len(), 8);
        assert_eq!(config.time_slots[0], "09:00");
        assert_eq!(config.time_slots[7], "16:00");
        assert_eq!(
            config.control_sources,
            [ControlSourceConfig::cooling(1, 1, 0), ControlSourceConfig::cooling(2, 1, 4)]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_starts_without_sources() {
        let config = RoomConfig::builder().build().unwrap();
        assert!(config.control_sources.is_empty());
    }

    #[test]
    fn source_outside_grid_is_rejected() {
        let result = RoomConfig::builder()
            .grid(3, 3)
            .control_source(ControlSourceConfig::cooling(1, 3, 0))
            .build();
        assert!(matches!(result, Err(ComfortError::InvalidConfig { .. })));
    }

    #[test]
    fn duplicate_source_ids_are_rejected() {
        let result = RoomConfig::builder()
            .control_source(ControlSourceConfig::cooling(1, 0, 0))
            .control_source(ControlSourceConfig::heating(1, 2, 2))
            .build();
        assert_eq!(
            result,
            Err(ComfortError::InvalidConfig {
                reason: "duplicate control source id"
            })
        );
    }

    #[test]
    fn bad_parameters_are_rejected() {
        assert!(RoomConfig::builder().grid(0, 4).build().is_err());
        assert!(RoomConfig::builder().weights(0.4, 0.4).build().is_err());
        assert!(RoomConfig::builder().influence(0.5, -1.0).build().is_err());
        assert!(RoomConfig::builder().time_slots(Vec::<String>::new()).build().is_err());
    }

    #[test]
    fn heating_source_is_negative() {
        let source = ControlSourceConfig::heating(3, 1, 1).inactive();
        assert!(source.effect < 0.0);
        assert!(!source.active);
    }
}
