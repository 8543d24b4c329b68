//! Water Presets
//!
//! Reference profiles for the two discrete water types. Ion values in mg/L,
//! EC in mS/cm. Tap water varies a lot by region; these are typical central
//! European municipal values.

use crate::nutrients::NutrientKey;
use crate::water::WaterPreset;

/// Municipal tap water.
pub const TAP_WATER: WaterPreset = WaterPreset {
    id: "tap",
    name: "Tap water",
    ph: 7.5,
    ec: 0.5,
    ions: &[
        (NutrientKey::Ca, 50.0),
        (NutrientKey::Mg, 10.0),
        (NutrientKey::Na, 20.0),
        (NutrientKey::S, 5.0),
        (NutrientKey::Fe, 0.05),
        (NutrientKey::Mn, 0.02),
        (NutrientKey::Zn, 0.01),
        (NutrientKey::Cu, 0.005),
        (NutrientKey::B, 0.01),
        (NutrientKey::Mo, 0.001),
    ],
};

/// Reverse osmosis permeate. Practically ion free.
pub const RO_WATER: WaterPreset = WaterPreset {
    id: "ro",
    name: "Reverse osmosis water",
    ph: 6.5,
    ec: 0.05,
    ions: &[],
};

/// Profile for a source added from an unrecognised preset id.
pub const FALLBACK_WATER: WaterPreset = WaterPreset {
    id: "source",
    name: "New source",
    ph: 7.0,
    ec: 0.2,
    ions: &[],
};

/// Volume of the default tap source in liters.
pub const DEFAULT_TAP_VOLUME_L: f64 = 100.0;

/// Upper end of the pH scale. Source pH is capped here on ingestion.
pub const PH_MAX: f64 = 14.0;
