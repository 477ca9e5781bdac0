//! Core traits
//!
//! One trait for input validation and one helper trait for numeric sanity
//! checks.

use crate::errors::ComfortResult;

/// Input validator
pub trait Validator {
    /// The type of input this validator handles
    type Value;

    /// Accept or reject one input
    fn validate(&self, value: &Self::Value) -> ComfortResult<()>;
}

/// Trait for numbers that can be checked for sanity
pub trait Validatable {
    /// Whether the value is a usable number (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
