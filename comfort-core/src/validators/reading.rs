//! Reading validator

use crate::{
    constants::{TEMP_RATING_MAX, TEMP_RATING_MIN},
    errors::{ComfortError, ComfortResult},
    reading::TempRating,
    traits::{Validatable, Validator},
};

/// Unvalidated reading fields as submitted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingInput {
    /// Measured illuminance in lux
    pub illuminance_lux: f64,
    /// Subjective temperature rating, expected on the 1-5 scale
    pub temp_rating: i64,
}

impl ReadingInput {
    /// Bundle the raw fields
    pub fn new(illuminance_lux: f64, temp_rating: i64) -> Self {
        Self {
            illuminance_lux,
            temp_rating,
        }
    }
}

/// Validator for submitted readings
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingValidator;

impl ReadingValidator {
    /// Check an illuminance value and return it unchanged
    pub fn check_illuminance(&self, lux: f64) -> ComfortResult<f64> {
        if !lux.is_valid() {
            return Err(ComfortError::InvalidValue);
        }
        if lux < 0.0 {
            return Err(ComfortError::NegativeIlluminance { value: lux });
        }
        Ok(lux)
    }

    /// Check a rating and convert it to a [`TempRating`]
    pub fn check_rating(&self, rating: i64) -> ComfortResult<TempRating> {
        if rating < i64::from(TEMP_RATING_MIN) || rating > i64::from(TEMP_RATING_MAX) {
            return Err(ComfortError::TempRatingOutOfRange {
                value: rating,
                min: TEMP_RATING_MIN,
                max: TEMP_RATING_MAX,
            });
        }
        // In range, so the narrowing cannot truncate.
        Ok(TempRating::from_checked(rating as u8))
    }
}

impl Validator for ReadingValidator {
    type Value = ReadingInput;

    fn validate(&self, value: &ReadingInput) -> ComfortResult<()> {
        self.check_illuminance(value.illuminance_lux)?;
        self.check_rating(value.temp_rating)?;
        Ok(())
    }
}
