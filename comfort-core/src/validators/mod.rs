//! Input Validators
//!
//! Readings come from people holding a phone light sensor and giving a gut
//! feeling about the temperature, so the checks are about plausibility of
//! the *format*, not of the physics:
//!
//! - **Illuminance** must be a finite, non-negative lux value. There is no
//!   upper bound: direct sunlight on a desk legitimately reads tens of
//!   thousands of lux.
//! - **Temperature rating** must be an integer on the 1-5 scale
//!   (1 = cold, 3 = neutral, 5 = hot).
//!
//! Anything else is rejected with an `InvalidInput`-class
//! [`ComfortError`](crate::ComfortError). Nothing is clamped.
//!
//! ```rust
//! use comfort_core::{ReadingValidator, Validator};
//! use comfort_core::validators::ReadingInput;
//!
//! let validator = ReadingValidator::default();
//! assert!(validator.validate(&ReadingInput::new(480.0, 3)).is_ok());
//! assert!(validator.validate(&ReadingInput::new(480.0, 6)).is_err());
//! assert!(validator.validate(&ReadingInput::new(-1.0, 3)).is_err());
//! ```

mod reading;

pub use reading::{ReadingInput, ReadingValidator};
