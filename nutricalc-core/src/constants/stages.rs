//! Growth Stage Bands
//!
//! Target bands per phenological stage for soilless cultivation. Primary
//! macronutrients (ppm), EC (mS/cm) and pH change with the stage; secondary
//! and micronutrient targets are the same for every stage.

use crate::classify::Band;
use crate::nutrients::NutrientKey;

/// Bands that vary by growth stage
#[derive(Debug, Clone, Copy)]
pub struct StageBands {
    /// Stage id used in documents
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Nitrogen band (ppm)
    pub n: Band,
    /// Phosphorus band (ppm)
    pub p: Band,
    /// Potassium band (ppm)
    pub k: Band,
    /// EC band (mS/cm)
    pub ec: Band,
    /// pH band
    pub ph: Band,
}

/// pH band shared by all stages.
pub const STAGE_PH: Band = Band::new(5.5, 6.5);

/// Stage table in lifecycle order. The first entry is the default stage.
pub const GROWTH_STAGES: [StageBands; 5] = [
    StageBands {
        id: "early_veg",
        name: "Early vegetative",
        n: Band::new(100.0, 150.0),
        p: Band::new(30.0, 50.0),
        k: Band::new(100.0, 150.0),
        ec: Band::new(0.8, 1.2),
        ph: STAGE_PH,
    },
    StageBands {
        id: "late_veg",
        name: "Late vegetative",
        n: Band::new(150.0, 200.0),
        p: Band::new(50.0, 70.0),
        k: Band::new(150.0, 200.0),
        ec: Band::new(1.2, 1.6),
        ph: STAGE_PH,
    },
    StageBands {
        id: "early_flower",
        name: "Early flowering",
        n: Band::new(100.0, 150.0),
        p: Band::new(70.0, 90.0),
        k: Band::new(200.0, 250.0),
        ec: Band::new(1.4, 1.8),
        ph: STAGE_PH,
    },
    StageBands {
        id: "mid_flower",
        name: "Mid flowering",
        n: Band::new(80.0, 120.0),
        p: Band::new(90.0, 110.0),
        k: Band::new(250.0, 300.0),
        ec: Band::new(1.6, 2.0),
        ph: STAGE_PH,
    },
    StageBands {
        id: "late_flower",
        name: "Late flowering",
        n: Band::new(50.0, 80.0),
        p: Band::new(110.0, 130.0),
        k: Band::new(300.0, 350.0),
        ec: Band::new(1.8, 2.2),
        ph: STAGE_PH,
    },
];

/// Secondary nutrient targets (ppm), all stages.
pub const SECONDARY_BANDS: [(NutrientKey, Band); 1] = [(NutrientKey::S, Band::new(30.0, 70.0))];

/// Micronutrient targets (ppm), all stages.
pub const MICRO_BANDS: [(NutrientKey, Band); 6] = [
    (NutrientKey::Fe, Band::new(0.5, 2.5)),
    (NutrientKey::Mn, Band::new(0.2, 1.0)),
    (NutrientKey::Zn, Band::new(0.05, 0.2)),
    (NutrientKey::Cu, Band::new(0.01, 0.05)),
    (NutrientKey::B, Band::new(0.02, 0.1)),
    (NutrientKey::Mo, Band::new(0.005, 0.02)),
];
