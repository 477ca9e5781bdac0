//! Time handling for comfort sessions
//!
//! Two different notions of time meet here:
//! - Wall-clock timestamps, used to stamp submissions and source activations
//!   (informational only, never part of a score)
//! - Time slots, the session's fixed list of time-of-day labels that key the
//!   reading store together with the position

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::errors::{ComfortError, ComfortResult};

/// Wall-clock instant in UTC
pub type Timestamp = DateTime<Utc>;

/// Source of wall-clock time
pub trait TimeSource {
    /// Current instant
    fn now(&self) -> Timestamp;
}

/// System wall clock (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Fixed time source for tests and replays
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `seconds`
    pub fn advance_secs(&mut self, seconds: i64) {
        self.timestamp += Duration::seconds(seconds);
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// One discrete time-of-day label, e.g. `"10:00"`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Create a slot label. Blank labels are rejected.
    pub fn new(label: impl Into<String>) -> ComfortResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ComfortError::InvalidConfig {
                reason: "time slot label is empty",
            });
        }
        Ok(Self(label))
    }

    /// The label text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ComfortError;

    fn try_from(label: String) -> ComfortResult<Self> {
        TimeSlot::new(label)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> String {
        slot.0
    }
}

/// Ordered, duplicate-free list of the session's time slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotSchedule {
    slots: Vec<TimeSlot>,
}

impl TimeSlotSchedule {
    /// Build a schedule from labels in presentation order
    pub fn new<I, S>(labels: I) -> ComfortResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut slots: Vec<TimeSlot> = Vec::new();
        for label in labels {
            let slot = TimeSlot::new(label)?;
            if slots.contains(&slot) {
                return Err(ComfortError::InvalidConfig {
                    reason: "duplicate time slot label",
                });
            }
            slots.push(slot);
        }

        if slots.is_empty() {
            return Err(ComfortError::InvalidConfig {
                reason: "at least one time slot is required",
            });
        }

        Ok(Self { slots })
    }

    /// Look up a label, rejecting anything outside the schedule
    pub fn resolve(&self, label: &str) -> ComfortResult<&TimeSlot> {
        self.slots
            .iter()
            .find(|slot| slot.as_str() == label)
            .ok_or_else(|| ComfortError::UnknownTimeSlot {
                label: String::from(label),
            })
    }

    /// Whether `label` is part of the schedule
    pub fn contains(&self, label: &str) -> bool {
        self.slots.iter().any(|slot| slot.as_str() == label)
    }

    /// Slots in presentation order
    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a constructed schedule
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
