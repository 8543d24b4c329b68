//! Built-in Fertilizer Table
//!
//! Manufacturer products with their declared elemental composition. Liquid
//! products are listed in mg per mL, powders in percent by weight (see
//! [`dosing`](super::dosing)). Zero entries are omitted.
//!
//! This table is read-only. Custom products are combined with it through
//! [`Catalog::merge`](crate::fertilizer::Catalog::merge), which builds a new
//! map and never touches the table.

use crate::fertilizer::FertilizerKind;
use crate::nutrients::NutrientKey;

/// One row of the built-in table
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFertilizer {
    /// Catalog id
    pub id: &'static str,
    /// Product name
    pub name: &'static str,
    /// Dose form
    pub kind: FertilizerKind,
    /// Dose unit shown to the user
    pub unit: &'static str,
    /// Declared composition
    pub composition: &'static [(NutrientKey, f64)],
}

/// Built-in products, ordered by manufacturer and product name.
pub const BUILTIN_FERTILIZERS: &[BuiltinFertilizer] = &[
    BuiltinFertilizer {
        id: "atami_ata_calmag",
        name: "Atami ATA CalMag",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 72.616),
            (NutrientKey::Ca, 60.87224),
            (NutrientKey::Mg, 18.8739),
            (NutrientKey::Fe, 0.3756),
        ],
    },
    BuiltinFertilizer {
        id: "atami_ata_clean",
        name: "Atami ATA Clean",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 10.36),
            (NutrientKey::P, 101.159702),
            (NutrientKey::K, 65.581649),
            (NutrientKey::Fe, 0.3885),
        ],
    },
    BuiltinFertilizer {
        id: "atami_ata_terra_leaves",
        name: "Atami ATA Terra Leaves",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 23.69),
            (NutrientKey::P, 4.944412),
            (NutrientKey::K, 23.942968),
            (NutrientKey::Mg, 6.83199),
        ],
    },
    BuiltinFertilizer {
        id: "atami_ata_terra_max",
        name: "Atami ATA Terra Max",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 24.42),
            (NutrientKey::P, 8.719272),
            (NutrientKey::K, 35.939358),
            (NutrientKey::Mg, 4.68531),
        ],
    },
    BuiltinFertilizer {
        id: "atami_bcuzz_bloom_stimulator",
        name: "Atami B'cuzz Bloom Stimulator",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 0.998),
            (NutrientKey::P, 0.78394896),
            (NutrientKey::K, 1.98849504),
            (NutrientKey::Ca, 1.997996),
            (NutrientKey::Mg, 1.203588),
            (NutrientKey::S, 0.51896),
            (NutrientKey::Zn, 0.00499),
            (NutrientKey::Cu, 0.00499),
        ],
    },
    BuiltinFertilizer {
        id: "atami_bcuzz_blossom_builder",
        name: "Atami B'cuzz Blossom Builder",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::P, 108.017728),
            (NutrientKey::K, 254.0412),
        ],
    },
    BuiltinFertilizer {
        id: "atami_bcuzz_coco_nutrition_a",
        name: "Atami B'cuzz Coco Nutrition A",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 60.75),
            (NutrientKey::K, 50.43465),
            (NutrientKey::Ca, 48.6486),
        ],
    },
    BuiltinFertilizer {
        id: "atami_bcuzz_coco_nutrition_b",
        name: "Atami B'cuzz Coco Nutrition B",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::P, 19.847472),
            (NutrientKey::K, 56.636244),
        ],
    },
    BuiltinFertilizer {
        id: "atami_bcuzz_premium_plant_powder",
        name: "Atami B'cuzz Premium Plant Powder",
        kind: FertilizerKind::Powder,
        unit: "g",
        composition: &[
            (NutrientKey::N, 90.0),
            (NutrientKey::P, 30.548),
            (NutrientKey::K, 141.134),
            (NutrientKey::Ca, 28.6),
            (NutrientKey::Mg, 18.09),
            (NutrientKey::Fe, 0.9),
            (NutrientKey::Mn, 0.4),
            (NutrientKey::Zn, 0.5),
            (NutrientKey::Cu, 0.004),
            (NutrientKey::B, 0.2),
            (NutrientKey::Mo, 0.03),
        ],
    },
    BuiltinFertilizer {
        id: "athena_blended_bloom_a",
        name: "Athena Blended Bloom A",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 47.8),
            (NutrientKey::K, 49.60445),
            (NutrientKey::Ca, 38.27824),
            (NutrientKey::Mg, 2.0320497),
            (NutrientKey::Fe, 0.717),
            (NutrientKey::Mn, 0.15535),
            (NutrientKey::Zn, 0.053775),
            (NutrientKey::B, 0.1195),
            (NutrientKey::Mo, 0.008365),
        ],
    },
    BuiltinFertilizer {
        id: "athena_blended_bloom_b",
        name: "Athena Blended Bloom B",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 8.078),
            (NutrientKey::P, 30.216336),
            (NutrientKey::K, 47.90254),
            (NutrientKey::Mg, 10.8554472),
            (NutrientKey::S, 15.002),
            (NutrientKey::Cu, 0.0577),
        ],
    },
    BuiltinFertilizer {
        id: "athena_blended_camg",
        name: "Athena Blended CaMg",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 22.24),
            (NutrientKey::Ca, 23.375352),
            (NutrientKey::Mg, 12.23057664),
            (NutrientKey::Fe, 0.6672),
        ],
    },
    BuiltinFertilizer {
        id: "athena_blended_grow_a",
        name: "Athena Blended Grow A",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 48.36),
            (NutrientKey::K, 10.037118),
            (NutrientKey::Ca, 50.828778),
            (NutrientKey::Mg, 2.29643505),
            (NutrientKey::Fe, 0.7254),
            (NutrientKey::Mn, 0.15717),
            (NutrientKey::Zn, 0.054405),
            (NutrientKey::B, 0.1209),
            (NutrientKey::Mo, 0.008463),
        ],
    },
    BuiltinFertilizer {
        id: "athena_blended_grow_b",
        name: "Athena Blended Grow B",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 11.4),
            (NutrientKey::P, 14.92488),
            (NutrientKey::K, 47.3214),
            (NutrientKey::Mg, 10.1531934),
            (NutrientKey::S, 14.82),
            (NutrientKey::Cu, 0.057),
        ],
    },
    BuiltinFertilizer {
        id: "athena_blended_pk",
        name: "Athena Blended PK",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::P, 26.655312),
            (NutrientKey::K, 63.38577),
            (NutrientKey::Mg, 14.6404179),
            (NutrientKey::S, 22.905),
        ],
    },
    BuiltinFertilizer {
        id: "athena_pro_bloom",
        name: "Athena Pro Bloom",
        kind: FertilizerKind::Powder,
        unit: "g",
        composition: &[
            (NutrientKey::P, 52.368),
            (NutrientKey::K, 199.248),
            (NutrientKey::Mg, 30.0294),
            (NutrientKey::S, 90.0),
            (NutrientKey::Fe, 1.0),
        ],
    },
    BuiltinFertilizer {
        id: "athena_pro_core",
        name: "Athena Pro Core",
        kind: FertilizerKind::Powder,
        unit: "g",
        composition: &[
            (NutrientKey::N, 140.0),
            (NutrientKey::Ca, 170.17),
            (NutrientKey::Fe, 0.7),
            (NutrientKey::Mn, 0.25),
            (NutrientKey::Zn, 0.1),
            (NutrientKey::Cu, 0.1),
            (NutrientKey::B, 0.15),
            (NutrientKey::Mo, 0.02),
        ],
    },
    BuiltinFertilizer {
        id: "athena_pro_fade",
        name: "Athena Pro Fade",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::Ca, 44.52448),
            (NutrientKey::Fe, 0.6672),
            (NutrientKey::Mn, 0.14456),
            (NutrientKey::Zn, 0.05004),
            (NutrientKey::Cu, 0.0556),
            (NutrientKey::B, 0.1112),
            (NutrientKey::Mo, 0.007784),
        ],
    },
    BuiltinFertilizer {
        id: "athena_pro_grow",
        name: "Athena Pro Grow",
        kind: FertilizerKind::Powder,
        unit: "g",
        composition: &[
            (NutrientKey::N, 20.0),
            (NutrientKey::P, 34.912),
            (NutrientKey::K, 166.04),
            (NutrientKey::Mg, 30.0294),
            (NutrientKey::S, 80.0),
            (NutrientKey::Fe, 1.0),
        ],
    },
    BuiltinFertilizer {
        id: "biobizz_alg_a_mic",
        name: "BioBizz Alg-a-mic",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 2.088),
            (NutrientKey::P, 0.9112032),
            (NutrientKey::K, 1.7334576),
            (NutrientKey::Ca, 1.045044),
            (NutrientKey::Mg, 1.04502312),
        ],
    },
    BuiltinFertilizer {
        id: "biobizz_bio_bloom",
        name: "BioBizz Bio Bloom",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 21.1464),
            (NutrientKey::P, 30.24828048),
            (NutrientKey::K, 38.65809696),
        ],
    },
    BuiltinFertilizer {
        id: "biobizz_bio_grow",
        name: "BioBizz Bio Grow",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 54.6),
            (NutrientKey::P, 17.0196),
            (NutrientKey::K, 64.7556),
        ],
    },
    BuiltinFertilizer {
        id: "biobizz_bio_heaven",
        name: "BioBizz Bio Heaven",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 12.288),
            (NutrientKey::P, 0.13406208),
            (NutrientKey::K, 0.17002496),
            (NutrientKey::Ca, 2.855424),
            (NutrientKey::Mg, 0.1234944),
            (NutrientKey::Fe, 2.56),
            (NutrientKey::Zn, 0.03072),
            (NutrientKey::B, 0.1024),
        ],
    },
    BuiltinFertilizer {
        id: "biobizz_calmag",
        name: "BioBizz CalMag",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::Ca, 35.31528),
            (NutrientKey::Mg, 12.055176),
        ],
    },
    BuiltinFertilizer {
        id: "biobizz_fish_mix",
        name: "BioBizz Fish Mix",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 61.1),
            (NutrientKey::P, 5.332808),
            (NutrientKey::K, 40.580176),
        ],
    },
    BuiltinFertilizer {
        id: "biobizz_root_juice",
        name: "BioBizz Root Juice",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 2.3092),
            (NutrientKey::P, 0.8762912),
            (NutrientKey::K, 1.08357704),
            (NutrientKey::Mg, 0.0605412),
        ],
    },
    BuiltinFertilizer {
        id: "biobizz_top_max",
        name: "BioBizz Top Max",
        kind: FertilizerKind::Liquid,
        unit: "ml",
        composition: &[
            (NutrientKey::N, 1.7068),
            (NutrientKey::P, 0.8762912),
            (NutrientKey::K, 1.16692912),
            (NutrientKey::Mg, 0.1816236),
            (NutrientKey::Fe, 0.1004),
            (NutrientKey::Zn, 0.03012),
            (NutrientKey::Cu, 0.01004),
            (NutrientKey::B, 0.11044),
        ],
    },
];
