//! Constants for NutriCalc Core
//!
//! Every fixed number the engine uses is defined here with its unit and
//! where it comes from. None of these are derived from first-principles
//! chemistry; they are working approximations used by growers.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Conductivity**: per-ion EC contribution coefficients
//! - **Dosing**: unit conversion between dose forms
//! - **Classification**: tolerance factors around optimal bands
//! - **Water**: tap and reverse osmosis presets
//! - **Stages**: growth stage target bands
//! - **Fertilizers**: the built-in product table
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Units go in the name (`_PPM`, `_MS_PER_CM`, `_PER_PPM`)
//! 3. Keep tables ordered the way they are displayed

/// EC-per-ppm coefficients for the linear conductivity estimate.
pub mod conductivity;

/// Dose form conversion factors.
pub mod dosing;

/// Tolerance factors for the graded classification scheme.
pub mod classification;

/// Water preset profiles.
pub mod water;

/// Growth stage bands.
pub mod stages;

/// Built-in fertilizer product table.
pub mod fertilizers;

// Re-export commonly used constants for convenience
pub use conductivity::{
    EC_PER_PPM_CA, EC_PER_PPM_K, EC_PER_PPM_MG, EC_PER_PPM_N, EC_PER_PPM_P, EC_PER_PPM_S,
};

pub use dosing::{
    DEFAULT_LIQUID_DOSE_ML, DEFAULT_POWDER_DOSE_G, LIQUID_DOSE_FACTOR, POWDER_DOSE_FACTOR,
};

pub use classification::{GAUGE_HEADROOM_FACTOR, GRADED_HIGH_FACTOR, GRADED_LOW_FACTOR};

pub use water::{FALLBACK_WATER, PH_MAX, RO_WATER, TAP_WATER};
