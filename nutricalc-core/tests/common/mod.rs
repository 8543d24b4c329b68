//! Shared fixtures for the integration tests
//!
//! Scenarios are built from the same presets and tables the engine ships
//! with, so a changed constant shows up here instead of being masked by a
//! hand-copied value.

#![allow(dead_code)]

use nutricalc_core::{
    constants::water::{RO_WATER, TAP_WATER},
    fertilizer::{Composition, Fertilizer, FertilizerKind},
    CalculationInput, Catalog, CustomWaterProfile, GrowthStageProfile, NutrientKey,
    SelectedFertilizer, StageTable, WaterSource, WaterType,
};

/// Owned inputs for one recompute
pub struct Scenario {
    pub water_volume: f64,
    pub stage: GrowthStageProfile,
    pub sources: Vec<WaterSource>,
    pub water_type: WaterType,
    pub custom_water: Option<CustomWaterProfile>,
    pub selection: Vec<SelectedFertilizer>,
    pub catalog: Catalog,
}

impl Scenario {
    /// 10 L of RO water, early vegetative, built-in catalog, nothing dosed
    pub fn ro_ten_liters() -> Self {
        Self {
            water_volume: 10.0,
            stage: StageTable::default().get_or_first("early_veg").clone(),
            sources: Vec::new(),
            water_type: WaterType::Ro,
            custom_water: None,
            selection: Vec::new(),
            catalog: Catalog::builtin(),
        }
    }

    /// Tap source A at 10 L with RO source B staged at 0 L
    pub fn tap_with_staged_ro() -> Self {
        Self {
            sources: vec![TAP_WATER.to_source("a", 10.0), RO_WATER.to_source("b", 0.0)],
            ..Self::ro_ten_liters()
        }
    }

    pub fn dose(mut self, id: &str, amount: f64) -> Self {
        self.selection.push(SelectedFertilizer::new(id, amount));
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn input(&self) -> CalculationInput<'_> {
        CalculationInput {
            water_volume: self.water_volume,
            stage: &self.stage,
            sources: &self.sources,
            water_type: self.water_type,
            custom_water: self.custom_water.as_ref(),
            selection: &self.selection,
            catalog: &self.catalog,
        }
    }
}

/// Single-nutrient test product
pub fn product(id: &str, kind: FertilizerKind, composition: &[(NutrientKey, f64)]) -> Fertilizer {
    Fertilizer {
        id: id.to_string(),
        name: id.to_string(),
        kind,
        unit: match kind {
            FertilizerKind::Liquid => "ml".to_string(),
            FertilizerKind::Powder => "g".to_string(),
        },
        description: None,
        composition: Composition::new(composition.iter().copied()),
    }
}

/// Source with only the fields the mixing tests vary
pub fn source(id: &str, ph: f64, ec: f64, ca: f64, volume: f64) -> WaterSource {
    WaterSource {
        id: id.to_string(),
        name: id.to_string(),
        ph,
        ec,
        ions: [(NutrientKey::Ca, ca)].into_iter().collect(),
        volume,
    }
}
