//! Nutrient solution engine for NutriCalc
//!
//! Turns a water base and a set of dosed fertilizers into the resulting
//! elemental concentrations (ppm), an estimated EC and a blended pH, then
//! classifies every value against a growth stage's optimal bands.
//!
//! Key constraints:
//! - Pure and synchronous: no I/O, no shared state, no suspension points
//! - Never panics or returns NaN/Infinity on mid-edit input
//! - Builds without `std` (math through `libm`)
//!
//! ```no_run
//! use nutricalc_core::{
//!     water::WaterSourceList, CalculationInput, Catalog, NutrientAggregator,
//!     SelectedFertilizer, StageTable, WaterType,
//! };
//!
//! let catalog = Catalog::builtin();
//! let stages = StageTable::default();
//! let sources = WaterSourceList::default();
//! let selection = [SelectedFertilizer::new("biobizz_bio_grow", 2.0)];
//!
//! let input = CalculationInput {
//!     water_volume: 10.0,
//!     stage: stages.get_or_first("early_veg"),
//!     sources: sources.as_slice(),
//!     water_type: WaterType::Tap,
//!     custom_water: None,
//!     selection: &selection,
//!     catalog: &catalog,
//! };
//!
//! let snapshot = NutrientAggregator::default().calculate(&input);
//! let report = snapshot.assess();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Logging stays optional so the engine builds on targets without `log`.
// The disabled forms expand to `()` so they are valid in expression position.
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{}};
}

pub mod calculator;
pub mod classify;
pub mod constants;
pub mod errors;
pub mod fertilizer;
pub mod nutrients;
pub mod stages;
pub mod time;
pub mod traits;
pub mod water;

// Public API
pub use calculator::{
    BaseWater, CalculationInput, ConductivityModel, NutrientAggregator, NutrientSnapshot,
};
pub use classify::{
    Band, Classifier, CoarseClassifier, CoarseStatus, GradedClassifier, StageReport, Status,
};
pub use errors::{CalcError, CalcResult};
pub use fertilizer::{
    Catalog, Composition, ContributionCalculator, CustomFertilizer, Fertilizer, FertilizerKind,
    SelectedFertilizer,
};
pub use nutrients::{NutrientKey, NutrientMap};
pub use stages::{GrowthStageProfile, StageTable};
pub use time::{FixedTime, MockTimeSource, TimeSource};
pub use water::{
    CustomWaterProfile, MixedWaterProfile, WaterMixer, WaterSource, WaterSourceList, WaterType,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    // Holds with and without the `log` feature
    #[test]
    fn log_macros_are_expressions() {
        let parsed: Result<NutrientKey, CalcError> = "no3".parse();
        let rejected = parsed.is_err();
        match parsed {
            Ok(_) => {}
            Err(_) => log_debug!("dropping {}", "no3"),
        }
        let () = log_warn!("volume {} too small", 1e-306);
        assert!(rejected);
    }
}
