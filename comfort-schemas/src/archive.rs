//! Versioned export and import of stored readings
//!
//! The engine never persists anything itself. A collaborator that wants the
//! readings to survive a restart encodes them here, stores the JSON wherever
//! it likes, and replays them into a fresh engine later. Replayed readings
//! keep their original submission time.

use serde::{Deserialize, Serialize};

use comfort_core::{ComfortEngine, TimeSource};

use crate::{records::ReadingRecord, SchemaError};

/// Archive format revision written by this crate
pub const ARCHIVE_VERSION: u32 = 1;

/// Every stored reading of one engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingArchive {
    /// Format revision
    pub schema_version: u32,
    /// Readings ordered by slot, then seat
    pub readings: Vec<ReadingRecord>,
}

impl ReadingArchive {
    /// Snapshot of the engine's store
    pub fn capture<C: TimeSource>(engine: &ComfortEngine<C>) -> Self {
        let grid = engine.grid();
        let readings = engine
            .readings()
            .iter()
            .map(|(slot, position, reading)| {
                ReadingRecord::new(grid.position_to_id(position), position, slot, reading)
            })
            .collect();

        Self {
            schema_version: ARCHIVE_VERSION,
            readings,
        }
    }
}

/// JSON archive of every reading stored in `engine`
pub fn encode_readings<C: TimeSource>(engine: &ComfortEngine<C>) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(&ReadingArchive::capture(engine))?)
}

/// Parse an archive produced by [`encode_readings`]
pub fn decode_readings(json: &str) -> Result<ReadingArchive, SchemaError> {
    let archive: ReadingArchive = serde_json::from_str(json)?;
    if archive.schema_version != ARCHIVE_VERSION {
        return Err(SchemaError::UnsupportedVersion {
            found: archive.schema_version,
            expected: ARCHIVE_VERSION,
        });
    }
    Ok(archive)
}

/// Replay an archive into `engine`, returning how many readings were stored.
///
/// Every record is checked before the first one is stored, so a bad archive
/// leaves the engine untouched.
pub fn restore_readings<C: TimeSource>(
    engine: &mut ComfortEngine<C>,
    archive: &ReadingArchive,
) -> Result<usize, SchemaError> {
    let mut checked = Vec::with_capacity(archive.readings.len());
    for record in &archive.readings {
        let position = record.checked_position(engine.grid())?;
        // Resolves the slot against this engine's schedule
        engine.reading(position, &record.time_slot)?;
        checked.push((position, record.time_slot.as_str(), record.to_reading()?));
    }

    let count = checked.len();
    for (position, slot, reading) in checked {
        engine.insert_reading(position, slot, reading)?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use comfort_core::{ComfortError, FixedClock, Position, RoomConfig};

    fn engine() -> ComfortEngine<FixedClock> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 3, 9, 15, 0).unwrap());
        ComfortEngine::with_clock(RoomConfig::classroom(), clock).unwrap()
    }

    #[test]
    fn restored_engine_scores_like_the_original() {
        let mut original = engine();
        original
            .submit_reading(Position::new(0, 0), "09:00", 380.0, 3, Some("door draft".into()))
            .unwrap();
        original.submit_reading(Position::new(4, 2), "09:00", 510.0, 2, None).unwrap();
        original.submit_reading(Position::new(4, 2), "13:00", 250.0, 4, None).unwrap();

        let json = encode_readings(&original).unwrap();
        let mut restored = engine();
        let count = restore_readings(&mut restored, &decode_readings(&json).unwrap()).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            restored.ranked_recommendations("09:00").unwrap(),
            original.ranked_recommendations("09:00").unwrap()
        );
        assert_eq!(restored.stats(), original.stats());
    }

    #[test]
    fn unknown_version_is_rejected() {
        let json = r#"{"schemaVersion": 2, "readings": []}"#;
        assert!(matches!(
            decode_readings(json),
            Err(SchemaError::UnsupportedVersion { found: 2, expected: 1 })
        ));
    }

    #[test]
    fn bad_record_leaves_engine_untouched() {
        let json = r#"{
            "schemaVersion": 1,
            "readings": [
                {"position": 1, "column": 0, "row": 0, "timeSlot": "09:00",
                 "illuminance": 500.0, "tempRating": 3, "timestamp": "2024-06-03T09:01:00Z"},
                {"position": 2, "column": 0, "row": 1, "timeSlot": "19:00",
                 "illuminance": 500.0, "tempRating": 3, "timestamp": "2024-06-03T09:02:00Z"}
            ]
        }"#;

        let mut target = engine();
        let archive = decode_readings(json).unwrap();
        assert!(matches!(
            restore_readings(&mut target, &archive),
            Err(SchemaError::Comfort(ComfortError::UnknownTimeSlot { .. }))
        ));
        assert!(target.readings().is_empty());
    }

    #[test]
    fn truncated_json_is_a_json_error() {
        assert!(matches!(
            decode_readings(r#"{"schemaVersion": 1, "readings": ["#),
            Err(SchemaError::Json(_))
        ));
    }
}
