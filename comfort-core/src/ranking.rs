//! Ranking engine: best positions first for one time slot
//!
//! Every position with a reading in the slot is scored and the list is
//! sorted by descending score. Candidates are enumerated in position-id
//! order and sorted with a stable sort, so exactly equal scores keep
//! ascending id order and repeated calls over the same inputs return the
//! same sequence.
//!
//! A slot without readings yields an empty list. Telling the user that
//! nobody has measured yet is the caller's job.

use alloc::vec::Vec;

use crate::{
    grid::{Grid, Position, PositionId},
    influence::ControlSource,
    reading::Reading,
    scorer::{ComfortCategory, ComfortScorer},
    store::ReadingStore,
    time::TimeSlot,
};

/// One ranked position
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recommendation {
    /// Seat number
    pub id: PositionId,
    /// Grid coordinates
    pub position: Position,
    /// Comfort score in [0, 100]
    pub score: f64,
    /// Category of the score
    pub category: ComfortCategory,
    /// The reading the score was computed from
    pub reading: Reading,
}

/// Ranks stored positions with a scorer
#[derive(Debug, Clone, Copy)]
pub struct RankingEngine<'a> {
    grid: &'a Grid,
    scorer: &'a ComfortScorer,
}

impl<'a> RankingEngine<'a> {
    /// Engine over `grid` using `scorer`
    pub fn new(grid: &'a Grid, scorer: &'a ComfortScorer) -> Self {
        Self { grid, scorer }
    }

    /// All recorded positions of `slot`, best first
    pub fn rank(
        &self,
        store: &ReadingStore,
        slot: &TimeSlot,
        sources: &[ControlSource],
    ) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = store
            .all_for_time_slot(slot)
            .map(|(position, reading)| {
                let score = self.scorer.score(position, reading, sources);
                Recommendation {
                    id: self.grid.position_to_id(position),
                    position,
                    score,
                    category: ComfortCategory::from_score(score),
                    reading: reading.clone(),
                }
            })
            .collect();

        // Enumeration order is not a storage guarantee, so fix it before the
        // stable sort decides ties.
        ranked.sort_by_key(|rec| rec.id);
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// The `n` best positions of `slot`
    pub fn top(
        &self,
        store: &ReadingStore,
        slot: &TimeSlot,
        sources: &[ControlSource],
        n: usize,
    ) -> Vec<Recommendation> {
        let mut ranked = self.rank(store, slot, sources);
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Timestamp;
    use chrono::{TimeZone, Utc};

    fn at() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap()
    }

    fn slot() -> TimeSlot {
        TimeSlot::new("10:00").unwrap()
    }

    fn fill(store: &mut ReadingStore, entries: &[(u16, u16, f64, i64)]) {
        for &(column, row, lux, rating) in entries {
            let reading = Reading::new(lux, rating, None, at()).unwrap();
            store.put(Position::new(column, row), slot(), reading);
        }
    }

    #[test]
    fn empty_slot_ranks_nothing() {
        let grid = Grid::new(6, 5).unwrap();
        let scorer = ComfortScorer::default();
        let ranked = RankingEngine::new(&grid, &scorer).rank(&ReadingStore::new(), &slot(), &[]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn best_score_comes_first() {
        let grid = Grid::new(6, 5).unwrap();
        let scorer = ComfortScorer::default();
        let mut store = ReadingStore::new();
        fill(&mut store, &[(0, 0, 200.0, 4), (3, 2, 500.0, 3), (5, 4, 900.0, 2)]);

        let ranked = RankingEngine::new(&grid, &scorer).rank(&store, &slot(), &[]);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].position, Position::new(3, 2));
        assert_eq!(ranked[0].score, 100.0);
        assert_eq!(ranked[0].id, PositionId(18));
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn ties_keep_id_order() {
        let grid = Grid::new(6, 5).unwrap();
        let scorer = ComfortScorer::default();
        let mut store = ReadingStore::new();
        fill(&mut store, &[(4, 1, 400.0, 3), (0, 3, 400.0, 3), (2, 0, 400.0, 3)]);

        let engine = RankingEngine::new(&grid, &scorer);
        let ids: Vec<u32> = engine
            .rank(&store, &slot(), &[])
            .iter()
            .map(|rec| rec.id.get())
            .collect();
        assert_eq!(ids, [4, 11, 22]);

        let again: Vec<u32> = engine
            .rank(&store, &slot(), &[])
            .iter()
            .map(|rec| rec.id.get())
            .collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn top_takes_a_prefix() {
        let grid = Grid::new(6, 5).unwrap();
        let scorer = ComfortScorer::default();
        let mut store = ReadingStore::new();
        fill(
            &mut store,
            &[(0, 0, 100.0, 3), (1, 1, 300.0, 3), (2, 2, 500.0, 3), (3, 3, 700.0, 3)],
        );

        let engine = RankingEngine::new(&grid, &scorer);
        let top = engine.top(&store, &slot(), &[], 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].position, Position::new(2, 2));

        assert_eq!(engine.top(&store, &slot(), &[], 10).len(), 4);
    }
}
