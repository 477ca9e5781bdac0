//! Request and response records of the HTTP surface

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use comfort_core::{
    Assessment, ComfortCategory, ControlSource, Grid, Position, PositionId, Reading,
    Recommendation, StoreStats, TimeSlot, Timestamp,
};

use crate::SchemaError;

/// RFC 3339 text of a timestamp, millisecond precision, `Z` suffix
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse RFC 3339 text into a UTC timestamp
pub fn parse_timestamp(text: &str) -> Result<Timestamp, SchemaError> {
    DateTime::parse_from_rfc3339(text)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| SchemaError::Timestamp {
            value: text.to_owned(),
            source,
        })
}

/// One stored reading on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRecord {
    /// Seat number
    pub position: u32,
    /// Column of the seat
    pub column: u16,
    /// Row of the seat
    pub row: u16,
    /// Time-slot label
    pub time_slot: String,
    /// Illuminance in lux
    pub illuminance: f64,
    /// Temperature rating 1-5
    pub temp_rating: u8,
    /// Free-text remark, empty when none was given
    #[serde(default)]
    pub comment: String,
    /// Submission time, RFC 3339
    pub timestamp: String,
}

impl ReadingRecord {
    /// Record of a stored reading
    pub fn new(id: PositionId, position: Position, slot: &TimeSlot, reading: &Reading) -> Self {
        Self {
            position: id.get(),
            column: position.column,
            row: position.row,
            time_slot: slot.as_str().to_owned(),
            illuminance: reading.illuminance_lux,
            temp_rating: reading.temp_rating.get(),
            comment: reading.comment.clone().unwrap_or_default(),
            timestamp: format_timestamp(&reading.submitted_at),
        }
    }

    /// Coordinates of the record, checked against its seat number on `grid`
    pub fn checked_position(&self, grid: &Grid) -> Result<Position, SchemaError> {
        let position = grid.resolve_position(Position::new(self.column, self.row))?;
        if grid.position_to_id(position).get() != self.position {
            return Err(SchemaError::InconsistentPosition {
                id: self.position,
                column: self.column,
                row: self.row,
            });
        }
        Ok(position)
    }

    /// Rebuild the reading, re-validating every field
    pub fn to_reading(&self) -> Result<Reading, SchemaError> {
        let submitted_at = parse_timestamp(&self.timestamp)?;
        let comment = Some(self.comment.clone());
        Ok(Reading::new(
            self.illuminance,
            i64::from(self.temp_rating),
            comment,
            submitted_at,
        )?)
    }
}

/// Body of `POST /readings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReadingRequest {
    /// Seat number
    pub position: u32,
    /// Time-slot label
    pub time_slot: String,
    /// Illuminance in lux
    pub illuminance: f64,
    /// Temperature rating; range-checked by the core
    pub temp_rating: i64,
    /// Optional remark
    #[serde(default)]
    pub comment: Option<String>,
}

/// Body of `PUT /control-sources/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSourceStateRequest {
    /// Desired state
    pub active: bool,
}

/// Score of one seat for one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    /// Seat number
    pub position: u32,
    /// Column of the seat
    pub column: u16,
    /// Row of the seat
    pub row: u16,
    /// Time-slot label
    pub time_slot: String,
    /// Score in [0, 100], `null` without a reading
    pub score: Option<f64>,
    /// Comfort category
    pub category: ComfortCategory,
    /// Colour hint of the category
    pub color: String,
}

impl AssessmentResponse {
    /// Response for an assessed seat
    pub fn new(id: PositionId, position: Position, slot: &str, assessment: Assessment) -> Self {
        Self {
            position: id.get(),
            column: position.column,
            row: position.row,
            time_slot: slot.to_owned(),
            score: assessment.score,
            category: assessment.category,
            color: assessment.category.color().to_owned(),
        }
    }
}

/// One entry of a ranked recommendation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// 1-based rank
    pub rank: usize,
    /// Seat number
    pub position: u32,
    /// Column of the seat
    pub column: u16,
    /// Row of the seat
    pub row: u16,
    /// Score in [0, 100]
    pub score: f64,
    /// Comfort category
    pub category: ComfortCategory,
    /// Colour hint of the category
    pub color: String,
    /// Illuminance of the underlying reading
    pub illuminance: f64,
    /// Temperature rating of the underlying reading
    pub temp_rating: u8,
    /// Remark of the underlying reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl RecommendationResponse {
    /// Wire form of the `index`-th entry of a ranking
    pub fn new(index: usize, rec: &Recommendation) -> Self {
        Self {
            rank: index + 1,
            position: rec.id.get(),
            column: rec.position.column,
            row: rec.position.row,
            score: rec.score,
            category: rec.category,
            color: rec.category.color().to_owned(),
            illuminance: rec.reading.illuminance_lux,
            temp_rating: rec.reading.temp_rating.get(),
            comment: rec.reading.comment.clone(),
        }
    }

    /// Wire form of a whole ranking
    pub fn from_ranking(ranked: &[Recommendation]) -> Vec<Self> {
        ranked
            .iter()
            .enumerate()
            .map(|(index, rec)| Self::new(index, rec))
            .collect()
    }
}

/// Current state of a control source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSourceRecord {
    /// Source id
    pub id: u32,
    /// Column of the source
    pub column: u16,
    /// Row of the source
    pub row: u16,
    /// Whether the source is on
    pub active: bool,
    /// Signed effect (positive cools)
    pub effect: f64,
    /// Last off-to-on transition, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<String>,
}

impl From<&ControlSource> for ControlSourceRecord {
    fn from(source: &ControlSource) -> Self {
        Self {
            id: source.id,
            column: source.position.column,
            row: source.position.row,
            active: source.is_active(),
            effect: source.effect,
            activated_at: source.activated_at().as_ref().map(format_timestamp),
        }
    }
}

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridResponse {
    /// Number of columns (W)
    pub columns: u16,
    /// Number of rows (H)
    pub rows: u16,
    /// Number of seats (W x H)
    pub positions: u32,
}

impl From<&Grid> for GridResponse {
    fn from(grid: &Grid) -> Self {
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            positions: grid.len(),
        }
    }
}

/// Admin counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Seats with at least one reading
    pub positions_with_data: usize,
    /// Readings across all seats and slots
    pub total_readings: usize,
}

impl From<StoreStats> for StatsResponse {
    fn from(stats: StoreStats) -> Self {
        Self {
            positions_with_data: stats.positions_with_data,
            total_readings: stats.total_readings,
        }
    }
}
