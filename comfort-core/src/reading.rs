//! Submitted readings
//!
//! A [`Reading`] is one person's report for one position and time slot:
//! what the light sensor said, how warm it felt, and an optional remark.
//! Readings are only ever built through [`Reading::new`], which validates.

use alloc::string::String;
use core::fmt;

use crate::{
    errors::ComfortResult,
    time::Timestamp,
    validators::ReadingValidator,
};

/// Subjective temperature rating on the 1-5 scale (3 = neutral)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TempRating(u8);

impl TempRating {
    /// Validate and wrap a raw rating
    pub fn new(rating: i64) -> ComfortResult<Self> {
        ReadingValidator.check_rating(rating)
    }

    pub(crate) const fn from_checked(rating: u8) -> Self {
        Self(rating)
    }

    /// Raw rating
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Rating as a real number for scoring
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for TempRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One submission for a (position, time slot) pair
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reading {
    /// Measured illuminance in lux, never negative
    pub illuminance_lux: f64,
    /// How warm the position felt
    pub temp_rating: TempRating,
    /// Free-text remark, `None` when left blank
    pub comment: Option<String>,
    /// When the reading was submitted
    pub submitted_at: Timestamp,
}

impl Reading {
    /// Validate the raw fields and build a reading.
    ///
    /// A blank comment (empty or whitespace only) is stored as `None`.
    pub fn new(
        illuminance_lux: f64,
        temp_rating: i64,
        comment: Option<String>,
        submitted_at: Timestamp,
    ) -> ComfortResult<Self> {
        let validator = ReadingValidator;
        let illuminance_lux = validator.check_illuminance(illuminance_lux)?;
        let temp_rating = validator.check_rating(temp_rating)?;

        Ok(Self {
            illuminance_lux,
            temp_rating,
            comment: comment.filter(|text| !text.trim().is_empty()),
            submitted_at,
        })
    }
}
