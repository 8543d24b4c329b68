//! Graded four-way classification with tolerance zones

use crate::{
    constants::classification::{GRADED_HIGH_FACTOR, GRADED_LOW_FACTOR},
    traits::{Classifier, Validatable},
};

use super::{Band, Status};

/// Low / moderate / optimal / high classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradedClassifier {
    /// Values below `min × low_factor` are low
    low_factor: f64,

    /// Values above `max × high_factor` are high
    high_factor: f64,
}

impl Default for GradedClassifier {
    fn default() -> Self {
        Self {
            low_factor: GRADED_LOW_FACTOR,
            high_factor: GRADED_HIGH_FACTOR,
        }
    }
}

impl GradedClassifier {
    /// Classifier with custom tolerance factors
    pub fn new_with_factors(low_factor: f64, high_factor: f64) -> Self {
        // A low factor above 1 or high factor below 1 would put the tolerance
        // zone inside the band
        Self {
            low_factor: low_factor.clamp(0.0, 1.0),
            high_factor: high_factor.max(1.0),
        }
    }

    /// No tolerance zone: anything outside the band is low or high
    pub fn strict() -> Self {
        Self::new_with_factors(1.0, 1.0)
    }

    /// Lower tolerance factor
    pub fn low_factor(&self) -> f64 {
        self.low_factor
    }

    /// Upper tolerance factor
    pub fn high_factor(&self) -> f64 {
        self.high_factor
    }
}

impl Classifier for GradedClassifier {
    type Status = Status;

    fn classify(&self, value: f64, band: Option<Band>) -> Status {
        let Some(band) = band else {
            return Status::Unknown;
        };
        if !value.is_valid() {
            return Status::Unknown;
        }

        if value < band.min * self.low_factor {
            Status::Low
        } else if value > band.max * self.high_factor {
            Status::High
        } else if band.contains(value) {
            Status::Optimal
        } else {
            Status::Moderate
        }
    }
}
