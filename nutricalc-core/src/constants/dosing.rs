//! Dose Form Conversion
//!
//! ```text
//! ppm = composition × amount × factor / liters
//! ```
//!
//! Powders are dosed in grams with composition in percent by weight, so
//! 1 g of an X% product in V liters gives X × 10 / V mg/L. Liquids are dosed
//! in milliliters with composition already expressed per milliliter.

/// Multiplier for powder doses (grams, percent-by-weight composition).
pub const POWDER_DOSE_FACTOR: f64 = 10.0;

/// Multiplier for liquid doses (milliliters, per-mL composition).
pub const LIQUID_DOSE_FACTOR: f64 = 1.0;

/// Starting dose when a powder is added to the selection (g).
pub const DEFAULT_POWDER_DOSE_G: f64 = 0.1;

/// Starting dose when a liquid is added to the selection (mL).
pub const DEFAULT_LIQUID_DOSE_ML: f64 = 1.0;
