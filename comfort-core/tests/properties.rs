//! Property tests for the grid, influence and scoring models

use chrono::{TimeZone, Utc};
use comfort_core::{
    ComfortScorer, ControlSource, Grid, InfluenceConfig, InfluenceModel, Position, PositionId,
    Reading,
};
use proptest::prelude::*;

fn reading(lux: f64, rating: i64) -> Reading {
    let at = Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap();
    Reading::new(lux, rating, None, at).unwrap()
}

fn source(id: u32, position: Position, active: bool) -> ControlSource {
    let mut source = ControlSource::new(id, position);
    source.set_active(active, Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap());
    source
}

proptest! {
    #[test]
    fn ids_and_positions_are_a_bijection(columns in 1u16..40, rows in 1u16..40) {
        let grid = Grid::new(columns, rows).unwrap();
        let mut seen = 0u32;
        for (index, position) in grid.positions().enumerate() {
            let id = grid.position_to_id(position);
            prop_assert_eq!(id, PositionId(index as u32 + 1));
            prop_assert_eq!(grid.id_to_position(id), position);
            seen += 1;
        }
        prop_assert_eq!(seen, grid.len());
    }

    #[test]
    fn score_stays_in_range(
        lux in 0.0f64..1.0e6,
        rating in 1i64..=5,
        column in 0u16..6,
        row in 0u16..5,
        k in 0.0f64..20.0,
        c in 0.01f64..10.0,
    ) {
        let influence = InfluenceModel::new(InfluenceConfig { coefficient: k, distance_floor: c }).unwrap();
        let scorer = ComfortScorer::new(Default::default(), influence).unwrap();
        let sources = [
            source(1, Position::new(1, 0), true),
            source(2, Position::new(1, 4), true),
        ];
        let score = scorer.score(Position::new(column, row), &reading(lux, rating), &sources);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn closer_to_optimal_light_never_scores_lower(
        near in 0.0f64..500.0,
        extra in 0.0f64..500.0,
        rating in 1i64..=5,
    ) {
        let scorer = ComfortScorer::default();
        let position = Position::new(0, 0);
        let far = (near - extra).max(0.0);
        let better = scorer.score(position, &reading(near, rating), &[]);
        let worse = scorer.score(position, &reading(far, rating), &[]);
        prop_assert!(better >= worse);
    }

    #[test]
    fn inactive_sources_exert_no_influence(
        k in 0.0f64..20.0,
        c in 0.01f64..10.0,
        column in 0u16..6,
        row in 0u16..5,
    ) {
        let model = InfluenceModel::new(InfluenceConfig { coefficient: k, distance_floor: c }).unwrap();
        let sources = [
            source(1, Position::new(1, 0), false),
            source(2, Position::new(1, 4), false),
        ];
        prop_assert_eq!(model.influence(&sources, Position::new(column, row)), 0.0);
        prop_assert_eq!(model.influence(&[], Position::new(column, row)), 0.0);
    }

    #[test]
    fn influence_decreases_with_distance(
        k in 0.01f64..20.0,
        c in 0.01f64..10.0,
        column in 0u16..6,
        row in 0u16..5,
    ) {
        prop_assume!((column, row) != (1, 0));
        let model = InfluenceModel::new(InfluenceConfig { coefficient: k, distance_floor: c }).unwrap();
        let ac = source(1, Position::new(1, 0), true);
        let at_source = model.contribution(&ac, Position::new(1, 0));
        let elsewhere = model.contribution(&ac, Position::new(column, row));
        prop_assert!(at_source > elsewhere);
        prop_assert!(elsewhere > 0.0);
    }
}
