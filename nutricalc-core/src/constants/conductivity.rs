//! Per-Ion Conductivity Coefficients
//!
//! EC of the final solution is estimated as the base water EC plus a linear
//! sum over the ppm each ion gained from fertilizers:
//!
//! ```text
//! Δec = max(0, Σ (total_i - base_i) × EC_PER_PPM_i)
//! ```
//!
//! The coefficients are empirical mS/cm-per-ppm approximations with no cited
//! derivation. Treat them as a replaceable table pending review by a domain
//! expert; [`ConductivityModel`](crate::calculator::ConductivityModel) accepts
//! a different set at runtime.
//!
//! Ionic interaction and activity effects are ignored. Micronutrients are
//! present in amounts too small to move EC and carry no coefficient.

// ===== PRIMARY MACRONUTRIENTS =====

/// Nitrogen contribution to EC (mS/cm per ppm).
pub const EC_PER_PPM_N: f64 = 0.007;

/// Phosphorus contribution to EC (mS/cm per ppm).
pub const EC_PER_PPM_P: f64 = 0.005;

/// Potassium contribution to EC (mS/cm per ppm).
pub const EC_PER_PPM_K: f64 = 0.008;

// ===== SECONDARY MACRONUTRIENTS =====

/// Calcium contribution to EC (mS/cm per ppm).
pub const EC_PER_PPM_CA: f64 = 0.006;

/// Magnesium contribution to EC (mS/cm per ppm).
pub const EC_PER_PPM_MG: f64 = 0.004;

/// Sulfur contribution to EC (mS/cm per ppm).
pub const EC_PER_PPM_S: f64 = 0.003;
