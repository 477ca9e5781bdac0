//! Influence model: how strongly active climate-control sources shift the
//! felt temperature at a position
//!
//! ## Model
//!
//! Each *active* source contributes
//!
//! ```text
//! contribution = effect * k / (distance + c)
//! ```
//!
//! where `distance` is the Euclidean distance in grid cells between source
//! and position, `k` is the effect coefficient and `c` the minimum-distance
//! floor that keeps a coincident position finite. The total influence is the
//! sum over all sources; inactive sources contribute nothing.
//!
//! The total is *subtracted* from the raw rating, so a positive influence
//! means "cooler than reported". With the defaults (`k = 0.5`, `c = 1`) a
//! source right above a seat lowers its effective rating by 0.5.
//!
//! ## Heating sources
//!
//! `effect` is a signed magnitude per source. [`COOLING_EFFECT`] (`+1.0`,
//! the default) reproduces the plain model above. A negative effect such as
//! [`HEATING_EFFECT`] pushes the effective temperature up instead.

use crate::{
    constants::{INFLUENCE_COEFFICIENT, INFLUENCE_DISTANCE_FLOOR},
    errors::{ComfortError, ComfortResult},
    grid::Position,
    time::Timestamp,
    traits::Validatable,
};

/// Effect magnitude of a standard cooling source
pub const COOLING_EFFECT: f64 = 1.0;

/// Effect magnitude of a heating source of the same strength
pub const HEATING_EFFECT: f64 = -1.0;

/// Influence parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfluenceConfig {
    /// Effect coefficient `k`
    pub coefficient: f64,
    /// Minimum-distance floor `c`, in grid cells
    pub distance_floor: f64,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            coefficient: INFLUENCE_COEFFICIENT,
            distance_floor: INFLUENCE_DISTANCE_FLOOR,
        }
    }
}

impl InfluenceConfig {
    /// Check that both parameters are usable
    pub fn validate(&self) -> ComfortResult<()> {
        if !self.coefficient.is_valid() || !self.distance_floor.is_valid() {
            return Err(ComfortError::InvalidConfig {
                reason: "influence parameters must be finite",
            });
        }
        if self.distance_floor <= 0.0 {
            return Err(ComfortError::InvalidConfig {
                reason: "influence distance floor must be positive",
            });
        }
        Ok(())
    }
}

/// Climate-control source at a fixed position
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ControlSource {
    /// Operator-facing identifier
    pub id: u32,
    /// Where the source sits on the grid
    pub position: Position,
    /// Signed effect magnitude, see [`COOLING_EFFECT`]
    pub effect: f64,
    active: bool,
    activated_at: Option<Timestamp>,
}

impl ControlSource {
    /// Switched-off cooling source
    pub fn new(id: u32, position: Position) -> Self {
        Self {
            id,
            position,
            effect: COOLING_EFFECT,
            active: false,
            activated_at: None,
        }
    }

    /// Same source with a different effect magnitude
    pub fn with_effect(mut self, effect: f64) -> Self {
        self.effect = effect;
        self
    }

    /// Whether the source currently runs
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// When the source was last switched on. Informational only.
    pub fn activated_at(&self) -> Option<Timestamp> {
        self.activated_at
    }

    /// Switch the source on or off.
    ///
    /// Switching an inactive source on records `at` as its activation time;
    /// switching an already running source on again keeps the original time.
    pub fn set_active(&mut self, active: bool, at: Timestamp) {
        if active && !self.active {
            self.activated_at = Some(at);
        }
        self.active = active;
    }
}

/// Influence calculator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InfluenceModel {
    config: InfluenceConfig,
}

impl InfluenceModel {
    /// Model with validated parameters
    pub fn new(config: InfluenceConfig) -> ComfortResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parameters in use
    pub fn config(&self) -> &InfluenceConfig {
        &self.config
    }

    /// Contribution of a single source at `position`
    pub fn contribution(&self, source: &ControlSource, position: Position) -> f64 {
        if !source.is_active() {
            return 0.0;
        }
        let distance = source.position.distance_to(&position);
        source.effect * self.config.coefficient / (distance + self.config.distance_floor)
    }

    /// Total influence of all sources at `position`
    pub fn influence(&self, sources: &[ControlSource], position: Position) -> f64 {
        sources
            .iter()
            .map(|source| self.contribution(source, position))
            .sum()
    }

    /// Raw rating corrected by the influence at `position`
    pub fn effective_temperature(
        &self,
        raw_rating: f64,
        sources: &[ControlSource],
        position: Position,
    ) -> f64 {
        raw_rating - self.influence(sources, position)
    }
}
