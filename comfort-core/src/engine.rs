//! Comfort engine: the request/response surface of the core
//!
//! A presentation layer (form screens, a heat map, an admin panel, an HTTP
//! service) owns all view state and talks to the core only through these
//! operations:
//!
//! | Operation                       | Direction                       |
//! |---------------------------------|---------------------------------|
//! | [`submit_reading`]              | caller -> core                  |
//! | [`set_control_source_state`]    | caller -> core                  |
//! | [`list_control_sources`]        | core -> caller                  |
//! | [`score_and_color`]             | core -> caller                  |
//! | [`ranked_recommendations`]      | core -> caller                  |
//! | [`heatmap`]                     | core -> caller                  |
//! | [`grid_dimensions`]             | core -> caller                  |
//!
//! Every request field is validated before anything is touched; a rejected
//! request leaves the engine unchanged.
//!
//! [`submit_reading`]: ComfortEngine::submit_reading
//! [`set_control_source_state`]: ComfortEngine::set_control_source_state
//! [`list_control_sources`]: ComfortEngine::list_control_sources
//! [`score_and_color`]: ComfortEngine::score_and_color
//! [`ranked_recommendations`]: ComfortEngine::ranked_recommendations
//! [`heatmap`]: ComfortEngine::heatmap
//! [`grid_dimensions`]: ComfortEngine::grid_dimensions
//!
//! ## Concurrency
//!
//! The engine is plain owned state with `&mut self` writers. A multi-client
//! host wraps it in a single lock; scoring and ranking only need `&self`.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    config::RoomConfig,
    constants::DEFAULT_TOP_N,
    errors::{ComfortError, ComfortResult},
    grid::{Grid, Position, PositionId},
    influence::{ControlSource, InfluenceModel},
    ranking::{RankingEngine, Recommendation},
    reading::Reading,
    scorer::{Assessment, ComfortScorer, ScoreBreakdown},
    store::{ReadingStore, StoreStats},
    time::{TimeSlot, TimeSlotSchedule, TimeSource},
};

#[cfg(feature = "std")]
use crate::time::SystemClock;

/// Assessment of one grid cell, for heat maps
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellAssessment {
    /// Seat number
    pub id: PositionId,
    /// Grid coordinates
    pub position: Position,
    /// Score and category of the cell
    pub assessment: Assessment,
}

/// Comfort engine for one room
#[derive(Debug, Clone)]
pub struct ComfortEngine<C: TimeSource> {
    grid: Grid,
    schedule: TimeSlotSchedule,
    sources: Vec<ControlSource>,
    store: ReadingStore,
    scorer: ComfortScorer,
    clock: C,
}

#[cfg(feature = "std")]
impl ComfortEngine<SystemClock> {
    /// Engine stamping submissions with the system clock
    pub fn new(config: RoomConfig) -> ComfortResult<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: TimeSource> ComfortEngine<C> {
    /// Engine stamping submissions with `clock`
    pub fn with_clock(config: RoomConfig, clock: C) -> ComfortResult<Self> {
        config.validate()?;

        let grid = Grid::new(config.columns, config.rows)?;
        let schedule = TimeSlotSchedule::new(config.time_slots.iter().cloned())?;
        let influence = InfluenceModel::new(config.influence)?;
        let scorer = ComfortScorer::new(config.scoring, influence)?;

        let started = clock.now();
        let mut sources: Vec<ControlSource> = config
            .control_sources
            .iter()
            .map(|source| {
                let mut built =
                    ControlSource::new(source.id, source.position()).with_effect(source.effect);
                built.set_active(source.active, started);
                built
            })
            .collect();
        sources.sort_by_key(|source| source.id);

        log_info!(
            "Comfort engine ready: {}x{} grid, {} time slots, {} control sources",
            grid.columns(),
            grid.rows(),
            schedule.len(),
            sources.len()
        );

        Ok(Self {
            grid,
            schedule,
            sources,
            store: ReadingStore::new(),
            scorer,
            clock,
        })
    }

    /// The room grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// `(W, H)`
    pub fn grid_dimensions(&self) -> (u16, u16) {
        self.grid.dimensions()
    }

    /// Time slots in presentation order
    pub fn time_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.schedule.iter()
    }

    /// Resolve a time-slot label against the schedule
    pub fn time_slot(&self, label: &str) -> ComfortResult<&TimeSlot> {
        self.schedule.resolve(label)
    }

    /// The scorer in use
    pub fn scorer(&self) -> &ComfortScorer {
        &self.scorer
    }

    /// Read access to every stored reading
    pub fn readings(&self) -> &ReadingStore {
        &self.store
    }

    /// Coordinates of a seat number
    pub fn position_for_id(&self, id: PositionId) -> ComfortResult<Position> {
        self.grid.resolve_id(id)
    }

    /// Seat number of a position
    pub fn id_for_position(&self, position: Position) -> ComfortResult<PositionId> {
        let position = self.grid.resolve_position(position)?;
        Ok(self.grid.position_to_id(position))
    }

    /// Validate, timestamp and store a reading (last write wins).
    ///
    /// Returns the stored reading.
    pub fn submit_reading(
        &mut self,
        position: Position,
        slot: &str,
        illuminance_lux: f64,
        temp_rating: i64,
        comment: Option<String>,
    ) -> ComfortResult<Reading> {
        let result = self
            .resolve(position, slot)
            .and_then(|(position, slot)| {
                Reading::new(illuminance_lux, temp_rating, comment, self.clock.now())
                    .map(|reading| (position, slot, reading))
            });

        let (position, slot, reading) = match result {
            Ok(accepted) => accepted,
            Err(e) => {
                log_warn!("Rejected reading for {} at '{}': {}", position, slot, e);
                return Err(e);
            }
        };

        log_debug!(
            "Reading at {} for {}: {} lux, rating {}",
            position,
            slot,
            reading.illuminance_lux,
            reading.temp_rating
        );
        self.store.put(position, slot, reading.clone());
        Ok(reading)
    }

    /// Store an already built reading, keeping its own timestamp.
    ///
    /// Used when replaying readings from an external record source.
    /// Returns the reading it replaced.
    pub fn insert_reading(
        &mut self,
        position: Position,
        slot: &str,
        reading: Reading,
    ) -> ComfortResult<Option<Reading>> {
        let (position, slot) = self.resolve(position, slot)?;
        Ok(self.store.put(position, slot, reading))
    }

    /// Reading for a position and slot, `None` when nobody measured
    pub fn reading(&self, position: Position, slot: &str) -> ComfortResult<Option<&Reading>> {
        let (position, slot) = self.resolve(position, slot)?;
        Ok(self.store.get(position, &slot))
    }

    /// Switch a control source on or off
    pub fn set_control_source_state(&mut self, id: u32, active: bool) -> ComfortResult<&ControlSource> {
        let now = self.clock.now();
        let source = self
            .sources
            .iter_mut()
            .find(|source| source.id == id)
            .ok_or(ComfortError::UnknownControlSource { id })?;

        source.set_active(active, now);
        log_info!(
            "Control source {} at {} switched {}",
            id,
            source.position,
            if active { "on" } else { "off" }
        );
        Ok(source)
    }

    /// All control sources in id order
    pub fn list_control_sources(&self) -> &[ControlSource] {
        &self.sources
    }

    /// One control source
    pub fn control_source(&self, id: u32) -> ComfortResult<&ControlSource> {
        self.sources
            .iter()
            .find(|source| source.id == id)
            .ok_or(ComfortError::UnknownControlSource { id })
    }

    /// Score and category of a position for a slot
    pub fn score_and_color(&self, position: Position, slot: &str) -> ComfortResult<Assessment> {
        let (position, slot) = self.resolve(position, slot)?;
        Ok(self
            .scorer
            .assess(position, self.store.get(position, &slot), &self.sources))
    }

    /// Score terms of a position for a slot, `None` without a reading
    pub fn breakdown(&self, position: Position, slot: &str) -> ComfortResult<Option<ScoreBreakdown>> {
        let (position, slot) = self.resolve(position, slot)?;
        Ok(self
            .store
            .get(position, &slot)
            .map(|reading| self.scorer.breakdown(position, reading, &self.sources)))
    }

    /// Every recorded position of a slot, best first
    pub fn ranked_recommendations(&self, slot: &str) -> ComfortResult<Vec<Recommendation>> {
        let slot = self.schedule.resolve(slot)?;
        Ok(self.ranking().rank(&self.store, slot, &self.sources))
    }

    /// The `n` best positions of a slot
    pub fn top_recommendations(&self, slot: &str, n: usize) -> ComfortResult<Vec<Recommendation>> {
        let slot = self.schedule.resolve(slot)?;
        Ok(self.ranking().top(&self.store, slot, &self.sources, n))
    }

    /// The default number of best positions of a slot
    pub fn default_recommendations(&self, slot: &str) -> ComfortResult<Vec<Recommendation>> {
        self.top_recommendations(slot, DEFAULT_TOP_N)
    }

    /// Assessment of every cell of the grid for a slot, in id order
    pub fn heatmap(&self, slot: &str) -> ComfortResult<Vec<CellAssessment>> {
        let slot = self.schedule.resolve(slot)?;
        Ok(self
            .grid
            .positions()
            .map(|position| CellAssessment {
                id: self.grid.position_to_id(position),
                position,
                assessment: self
                    .scorer
                    .assess(position, self.store.get(position, slot), &self.sources),
            })
            .collect())
    }

    /// Position and reading counters
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    fn ranking(&self) -> RankingEngine<'_> {
        RankingEngine::new(&self.grid, &self.scorer)
    }

    fn resolve(&self, position: Position, slot: &str) -> ComfortResult<(Position, TimeSlot)> {
        let position = self.grid.resolve_position(position)?;
        let slot = self.schedule.resolve(slot)?.clone();
        Ok((position, slot))
    }
}
