//! Range Classification Against Optimal Bands
//!
//! ## Overview
//!
//! A resulting value is compared against the stage's `[min, max]` band and
//! labelled. Two schemes exist, built on one contract:
//!
//! ### Graded scheme (canonical)
//! [`GradedClassifier`] yields [`Status`]:
//! ```text
//! no band                      → Unknown
//! value < min × 0.8            → Low
//! value > max × 1.2            → High
//! min ≤ value ≤ max            → Optimal
//! anything else                → Moderate   (tolerance zone)
//! ```
//!
//! ### Coarse scheme (derived)
//! [`CoarseClassifier`] collapses the graded result into [`CoarseStatus`]:
//! `Optimal` stays `Optimal`, `Unknown` stays `Unknown`, and `Low`,
//! `Moderate`, `High` all become `Suboptimal`. Because it is derived from
//! the graded scheme the two can never disagree on what is optimal.
//!
//! ### Where each applies
//! Primary macronutrients (N, P, K), EC and pH are shown with the coarse
//! scheme: their bands are already wide and a binary signal reads best.
//! Secondary and micronutrients use the graded scheme, where values
//! marginally outside a narrow band are common and not worth an alarm.
//! [`StageReport`] applies this split.
//!
//! ## Usage Example
//!
//! ```rust
//! use nutricalc_core::classify::{Band, Classifier, GradedClassifier, Status};
//!
//! let classifier = GradedClassifier::default();
//! let iron = Band::new(0.5, 2.5);
//!
//! assert_eq!(classifier.classify(1.0, Some(iron)), Status::Optimal);
//! assert_eq!(classifier.classify(0.45, Some(iron)), Status::Moderate);
//! assert_eq!(classifier.classify(0.1, Some(iron)), Status::Low);
//! assert_eq!(classifier.classify(1.0, None), Status::Unknown);
//! ```

mod coarse;
mod graded;
mod report;
mod utils;

pub use coarse::CoarseClassifier;
pub use graded::GradedClassifier;
pub use report::{Assessment, Measure, Scheme, StageReport};
pub use utils::gauge_percent;

pub use crate::traits::Classifier;

/// Closed optimal interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl Band {
    /// Band from bounds as given
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Band from user input, swapping bounds given in the wrong order
    pub fn ordered(a: f64, b: f64) -> Self {
        if a > b {
            Self::new(b, a)
        } else {
            Self::new(a, b)
        }
    }

    /// True if `min ≤ value ≤ max`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Graded classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// No band to compare against
    Unknown,
    /// Below the lower tolerance zone
    Low,
    /// Just outside the band, inside the tolerance zone
    Moderate,
    /// Inside the band
    Optimal,
    /// Above the upper tolerance zone
    High,
}

/// Coarse classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoarseStatus {
    /// No band to compare against
    Unknown,
    /// Inside the band
    Optimal,
    /// Outside the band
    Suboptimal,
}

impl Status {
    /// Lower-case name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Optimal => "optimal",
            Self::High => "high",
        }
    }

    /// Collapse into the coarse scheme
    pub const fn coarse(self) -> CoarseStatus {
        match self {
            Self::Unknown => CoarseStatus::Unknown,
            Self::Optimal => CoarseStatus::Optimal,
            Self::Low | Self::Moderate | Self::High => CoarseStatus::Suboptimal,
        }
    }
}

impl CoarseStatus {
    /// Lower-case name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Optimal => "optimal",
            Self::Suboptimal => "suboptimal",
        }
    }
}

impl From<Status> for CoarseStatus {
    fn from(status: Status) -> Self {
        status.coarse()
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Display for CoarseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_bounds_are_inclusive() {
        let band = Band::new(100.0, 150.0);
        assert!(band.contains(100.0));
        assert!(band.contains(150.0));
        assert!(!band.contains(99.99));
    }

    #[test]
    fn ordered_swaps_reversed_bounds() {
        assert_eq!(Band::ordered(2.0, 1.0), Band::new(1.0, 2.0));
        assert_eq!(Band::ordered(1.0, 2.0), Band::new(1.0, 2.0));
    }

    #[test]
    fn coarse_collapse() {
        assert_eq!(Status::Low.coarse(), CoarseStatus::Suboptimal);
        assert_eq!(Status::Moderate.coarse(), CoarseStatus::Suboptimal);
        assert_eq!(Status::High.coarse(), CoarseStatus::Suboptimal);
        assert_eq!(CoarseStatus::from(Status::Optimal), CoarseStatus::Optimal);
        assert_eq!(CoarseStatus::from(Status::Unknown), CoarseStatus::Unknown);
    }
}
