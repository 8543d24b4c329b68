//! Core traits for the engine
//!
//! Kept small: a classification seam and numeric sanitizing for values that
//! arrive from user input.

use crate::classify::Band;

/// Compares a value against an optional optimal band
pub trait Classifier {
    /// The status this scheme produces
    type Status;

    /// Classify a single value; `None` means the band is unknown
    fn classify(&self, value: f64, band: Option<Band>) -> Self::Status;
}

/// Trait for values that can be checked for numeric validity
pub trait Validatable {
    /// Check if the value is usable (not NaN, not infinite)
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

/// Coercion applied to every composition and source value
pub trait NonNegative {
    /// NaN, infinities and negatives become 0
    fn non_negative(self) -> f64;
}

impl NonNegative for f64 {
    fn non_negative(self) -> f64 {
        if self.is_valid() && self > 0.0 {
            self
        } else {
            0.0
        }
    }
}

impl NonNegative for f32 {
    fn non_negative(self) -> f64 {
        f64::from(self).non_negative()
    }
}
