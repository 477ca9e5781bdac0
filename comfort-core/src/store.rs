//! Reading store: at most one reading per (position, time slot)
//!
//! A second submission for the same key replaces the first entirely
//! (last-write-wins). Nothing expires on its own.
//!
//! The store trusts its keys; positions and slots are validated by the
//! engine before they get here. Entries are kept in a `BTreeMap` keyed by
//! `(slot, position)`, so all readings of one slot form a contiguous range.

use alloc::collections::{BTreeMap, BTreeSet};

use crate::{grid::Position, reading::Reading, time::TimeSlot};

/// Counters over the whole store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StoreStats {
    /// Distinct positions with at least one reading in any slot
    pub positions_with_data: usize,
    /// Readings across all positions and slots
    pub total_readings: usize,
}

/// In-memory reading store
#[derive(Debug, Clone, Default)]
pub struct ReadingStore {
    readings: BTreeMap<(TimeSlot, Position), Reading>,
}

impl ReadingStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `reading`, returning the reading it replaced
    pub fn put(&mut self, position: Position, slot: TimeSlot, reading: Reading) -> Option<Reading> {
        let previous = self.readings.insert((slot, position), reading);
        if previous.is_some() {
            log_debug!("Reading at {} replaced", position);
        }
        previous
    }

    /// Reading for the exact key, if any
    pub fn get(&self, position: Position, slot: &TimeSlot) -> Option<&Reading> {
        self.readings.get(&(slot.clone(), position))
    }

    /// Every recorded (position, reading) pair of one slot.
    ///
    /// Positions without a reading are left out, not zero-filled.
    pub fn all_for_time_slot<'a>(
        &'a self,
        slot: &TimeSlot,
    ) -> impl Iterator<Item = (Position, &'a Reading)> + 'a {
        let start = (slot.clone(), Position::new(0, 0));
        let end = (slot.clone(), Position::new(u16::MAX, u16::MAX));
        self.readings
            .range(start..=end)
            .map(|((_, position), reading)| (*position, reading))
    }

    /// Number of stored readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether nothing has been submitted yet
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Position and reading counters
    pub fn stats(&self) -> StoreStats {
        let positions: BTreeSet<Position> =
            self.readings.keys().map(|(_, position)| *position).collect();
        StoreStats {
            positions_with_data: positions.len(),
            total_readings: self.readings.len(),
        }
    }

    /// Every entry as `(slot, position, reading)`
    pub fn iter(&self) -> impl Iterator<Item = (&TimeSlot, Position, &Reading)> {
        self.readings
            .iter()
            .map(|((slot, position), reading)| (slot, *position, reading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use chrono::{TimeZone, Utc};

    fn slot(label: &str) -> TimeSlot {
        TimeSlot::new(label).unwrap()
    }

    fn reading(lux: f64, rating: i64, comment: Option<&str>) -> Reading {
        let at = Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap();
        Reading::new(lux, rating, comment.map(Into::into), at).unwrap()
    }

    #[test]
    fn second_submission_replaces_first() {
        let mut store = ReadingStore::new();
        let position = Position::new(2, 3);

        assert!(store.put(position, slot("10:00"), reading(300.0, 2, Some("drafty"))).is_none());
        let previous = store.put(position, slot("10:00"), reading(650.0, 4, None));

        assert_eq!(previous.map(|r| r.illuminance_lux), Some(300.0));
        let latest = store.get(position, &slot("10:00")).unwrap();
        assert_eq!(latest.illuminance_lux, 650.0);
        assert_eq!(latest.temp_rating.get(), 4);
        assert_eq!(latest.comment, None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn slots_are_separate_keys() {
        let mut store = ReadingStore::new();
        let position = Position::new(0, 0);
        store.put(position, slot("09:00"), reading(400.0, 3, None));
        store.put(position, slot("10:00"), reading(500.0, 3, None));

        assert_eq!(store.get(position, &slot("09:00")).unwrap().illuminance_lux, 400.0);
        assert_eq!(store.get(position, &slot("10:00")).unwrap().illuminance_lux, 500.0);
        assert!(store.get(position, &slot("11:00")).is_none());
    }

    #[test]
    fn slot_listing_excludes_other_slots_and_empty_positions() {
        let mut store = ReadingStore::new();
        store.put(Position::new(5, 4), slot("10:00"), reading(500.0, 3, None));
        store.put(Position::new(0, 1), slot("10:00"), reading(500.0, 3, None));
        store.put(Position::new(3, 3), slot("11:00"), reading(500.0, 3, None));

        let positions: Vec<Position> = store
            .all_for_time_slot(&slot("10:00"))
            .map(|(position, _)| position)
            .collect();
        assert_eq!(positions, [Position::new(0, 1), Position::new(5, 4)]);
        assert_eq!(store.all_for_time_slot(&slot("12:00")).count(), 0);
    }

    #[test]
    fn stats_count_positions_and_readings() {
        let mut store = ReadingStore::new();
        assert_eq!(store.stats(), StoreStats::default());

        store.put(Position::new(0, 0), slot("09:00"), reading(500.0, 3, None));
        store.put(Position::new(0, 0), slot("10:00"), reading(500.0, 3, None));
        store.put(Position::new(1, 0), slot("10:00"), reading(500.0, 3, None));

        assert_eq!(
            store.stats(),
            StoreStats {
                positions_with_data: 2,
                total_readings: 3,
            }
        );
    }
}
