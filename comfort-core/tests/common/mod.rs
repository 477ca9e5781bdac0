//! Shared fixtures for the comfort-core integration tests
//!
//! - A classroom engine on a frozen clock
//! - A source-free room for scoring without influence
//! - Helpers for bulk submissions

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use comfort_core::{
    ComfortEngine, ComfortResult, FixedClock, Position, Recommendation, RoomConfig, Timestamp,
};

/// Instant every fixture clock starts at
pub fn session_start() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 3, 8, 45, 0).unwrap()
}

/// The reference classroom, both air conditioners on
pub fn classroom() -> ComfortEngine<FixedClock> {
    ComfortEngine::with_clock(RoomConfig::classroom(), FixedClock::new(session_start()))
        .expect("classroom config is valid")
}

/// Classroom grid and slots without any control source
pub fn quiet_room() -> ComfortEngine<FixedClock> {
    let config = RoomConfig::builder().build().expect("builder defaults are valid");
    ComfortEngine::with_clock(config, FixedClock::new(session_start()))
        .expect("quiet room config is valid")
}

/// Submit `(column, row, lux, rating)` readings for one slot
pub fn submit_all(
    engine: &mut ComfortEngine<FixedClock>,
    slot: &str,
    readings: &[(u16, u16, f64, i64)],
) -> ComfortResult<()> {
    for &(column, row, lux, rating) in readings {
        engine.submit_reading(Position::new(column, row), slot, lux, rating, None)?;
    }
    Ok(())
}

/// Seat numbers of a ranking, in ranked order
pub fn ids(ranked: &[Recommendation]) -> Vec<u32> {
    ranked.iter().map(|rec| rec.id.get()).collect()
}

/// Approximate float comparison
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
