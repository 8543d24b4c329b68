//! Nutrient Aggregation and EC Estimation
//!
//! ## Overview
//!
//! [`NutrientAggregator`] is the recompute-on-change entry point. It takes a
//! complete [`CalculationInput`] and produces a fresh [`NutrientSnapshot`];
//! nothing is cached between calls and identical input gives identical
//! output.
//!
//! ## Pipeline
//!
//! 1. **Guard**: a water volume of zero or less short-circuits to an empty
//!    snapshot carrying the stage and an `InvalidVolume` diagnostic. So does
//!    a volume so small that the doses overflow.
//! 2. **Base water**: the blend of all sources if any carry volume, else the
//!    custom profile when the water type is `custom`, else the preset
//! 3. **Contributions**: every dosed product's ppm added on top of the base
//! 4. **EC**: base EC plus a linear estimate of the added salts
//! 5. **Rounding**: final values to two decimals, NaN to 0
//!
//! ## EC Estimate
//!
//! ```text
//! Δec = max(0, Σ coefficient_ion × (total_ion − base_ion))
//! ec  = base_ec + Δec
//! ```
//!
//! over N, P, K, Ca, Mg and S. The coefficients are empirical and live in
//! [`ConductivityModel`]; swap them without touching the aggregation.
//!
//! pH is taken from the base water. Fertilizers do not move it.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    classify::{GradedClassifier, StageReport},
    constants::{
        conductivity::{
            EC_PER_PPM_CA, EC_PER_PPM_K, EC_PER_PPM_MG, EC_PER_PPM_N, EC_PER_PPM_P, EC_PER_PPM_S,
        },
        water::{RO_WATER, TAP_WATER},
    },
    errors::CalcError,
    fertilizer::{Catalog, ContributionCalculator, SelectedFertilizer},
    nutrients::{round2, NutrientKey, NutrientMap},
    stages::GrowthStageProfile,
    traits::{NonNegative, Validatable},
    water::{CustomWaterProfile, MixedWaterProfile, WaterMixer, WaterPreset, WaterSource, WaterType},
};

/// Per-ion EC-per-ppm coefficients (mS/cm per mg/L)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConductivityModel {
    /// Nitrogen
    pub n: f64,
    /// Phosphorus
    pub p: f64,
    /// Potassium
    pub k: f64,
    /// Calcium
    pub ca: f64,
    /// Magnesium
    pub mg: f64,
    /// Sulfur
    pub s: f64,
}

impl Default for ConductivityModel {
    fn default() -> Self {
        Self {
            n: EC_PER_PPM_N,
            p: EC_PER_PPM_P,
            k: EC_PER_PPM_K,
            ca: EC_PER_PPM_CA,
            mg: EC_PER_PPM_MG,
            s: EC_PER_PPM_S,
        }
    }
}

impl ConductivityModel {
    /// Coefficient for `key`; ions outside the model count 0
    pub fn coefficient(&self, key: NutrientKey) -> f64 {
        match key {
            NutrientKey::N => self.n,
            NutrientKey::P => self.p,
            NutrientKey::K => self.k,
            NutrientKey::Ca => self.ca,
            NutrientKey::Mg => self.mg,
            NutrientKey::S => self.s,
            _ => 0.0,
        }
    }

    /// EC added on top of the base, never negative
    pub fn added_ec(&self, base: &NutrientMap, total: &NutrientMap) -> f64 {
        let delta: f64 = NutrientKey::ALL
            .iter()
            .map(|&key| (total.get(key) - base.get(key)) * self.coefficient(key))
            .sum();
        if delta.is_valid() {
            delta.max(0.0)
        } else {
            0.0
        }
    }
}

/// Water the solution is built on
#[derive(Debug, Clone, PartialEq)]
pub enum BaseWater {
    /// Blend of the water sources
    Mixed(MixedWaterProfile),
    /// A fixed water type
    Preset(&'static WaterPreset),
    /// Manually entered analysis
    Custom(CustomWaterProfile),
}

impl BaseWater {
    /// Pick the base by precedence: blend, then custom profile, then preset
    ///
    /// A `custom` water type without a profile resolves to an all-zero
    /// profile.
    pub fn resolve(
        mixed: Option<MixedWaterProfile>,
        water_type: WaterType,
        custom: Option<&CustomWaterProfile>,
    ) -> Self {
        if let Some(mixed) = mixed {
            return Self::Mixed(mixed);
        }
        match water_type {
            WaterType::Custom => Self::Custom(custom.copied().unwrap_or_default()),
            WaterType::Tap => Self::Preset(&TAP_WATER),
            WaterType::Ro => Self::Preset(&RO_WATER),
        }
    }

    /// Ion concentrations (mg/L)
    pub fn ions(&self) -> NutrientMap {
        match self {
            Self::Mixed(mixed) => mixed.ions.clone(),
            Self::Preset(preset) => preset.ion_map(),
            Self::Custom(profile) => profile.ion_map(),
        }
    }

    /// EC (mS/cm)
    pub fn ec(&self) -> f64 {
        match self {
            Self::Mixed(mixed) => mixed.ec,
            Self::Preset(preset) => preset.ec,
            Self::Custom(profile) => profile.base_ec,
        }
        .non_negative()
    }

    /// pH
    pub fn ph(&self) -> f64 {
        match self {
            Self::Mixed(mixed) => mixed.ph,
            Self::Preset(preset) => preset.ph,
            Self::Custom(profile) => profile.ph,
        }
        .non_negative()
    }
}

/// Complete input of one recompute
#[derive(Debug, Clone, Copy)]
pub struct CalculationInput<'a> {
    /// Solution volume (L)
    pub water_volume: f64,
    /// Target growth stage
    pub stage: &'a GrowthStageProfile,
    /// Water sources to blend; may be empty
    pub sources: &'a [WaterSource],
    /// Fallback water type when the sources carry no volume
    pub water_type: WaterType,
    /// Profile used when `water_type` is `custom`
    pub custom_water: Option<&'a CustomWaterProfile>,
    /// Dosed products
    pub selection: &'a [SelectedFertilizer],
    /// Catalog the selection resolves against
    pub catalog: &'a Catalog,
}

/// Output of one recompute
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutrientSnapshot {
    /// Resulting concentrations (ppm), rounded to two decimals
    pub nutrients: NutrientMap,
    /// Resulting EC (mS/cm); `None` when the volume was invalid
    pub ec: Option<f64>,
    /// Resulting pH; `None` when the volume was invalid
    pub ph: Option<f64>,
    /// Unrounded ppm per product, keyed by catalog id
    pub contributions: BTreeMap<String, NutrientMap>,
    /// Stage the snapshot was computed for
    pub stage: GrowthStageProfile,
    /// Degradations hit during the computation
    pub diagnostics: Vec<CalcError>,
}

impl NutrientSnapshot {
    /// Snapshot with no values
    pub fn empty(stage: GrowthStageProfile) -> Self {
        Self {
            nutrients: NutrientMap::new(),
            ec: None,
            ph: None,
            contributions: BTreeMap::new(),
            stage,
            diagnostics: Vec::new(),
        }
    }

    /// True if no value was computed
    pub fn is_empty(&self) -> bool {
        self.nutrients.is_empty() && self.ec.is_none() && self.ph.is_none()
    }

    /// Classify every value against the stage with default tolerances
    pub fn assess(&self) -> StageReport {
        self.assess_with(&GradedClassifier::default())
    }

    /// Classify every value against the stage
    pub fn assess_with(&self, classifier: &GradedClassifier) -> StageReport {
        StageReport::new(self, classifier)
    }
}

/// Combines base water and fertilizer doses into a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientAggregator {
    conductivity: ConductivityModel,
}

impl NutrientAggregator {
    /// Aggregator with custom EC coefficients
    pub fn new_with_model(conductivity: ConductivityModel) -> Self {
        Self { conductivity }
    }

    /// EC coefficients in use
    pub fn conductivity(&self) -> &ConductivityModel {
        &self.conductivity
    }

    /// Compute the snapshot for `input`. Never fails; see `diagnostics`.
    pub fn calculate(&self, input: &CalculationInput<'_>) -> NutrientSnapshot {
        let mut snapshot = NutrientSnapshot::empty(input.stage.clone());

        let volume = input.water_volume;
        if !volume.is_valid() || volume <= 0.0 {
            log_warn!("water volume {} is not positive, returning empty result", volume);
            snapshot.diagnostics.push(CalcError::InvalidVolume { volume });
            return snapshot;
        }

        let mixed = WaterMixer::mix(input.sources);
        if mixed.is_none() && !input.sources.is_empty() {
            log_debug!("no water mix, using '{}' water", input.water_type);
            snapshot.diagnostics.push(CalcError::MixingUndefined);
        }
        let base = BaseWater::resolve(mixed, input.water_type, input.custom_water);
        let base_ions = base.ions();

        let mut total = NutrientMap::zeroed();
        for (key, value) in base_ions.iter() {
            total.set(key, value.non_negative());
        }

        let contributions =
            ContributionCalculator::calculate(input.selection, input.catalog, volume);
        let overflowed = contributions
            .diagnostics
            .iter()
            .any(|error| matches!(error, CalcError::InvalidVolume { .. }));
        snapshot.diagnostics.extend(contributions.diagnostics);
        if overflowed {
            return snapshot;
        }

        for (key, value) in contributions.total.iter() {
            total.add(key, value);
        }

        let ec = base.ec() + self.conductivity.added_ec(&base_ions, &total);
        if !total.is_finite() || !ec.is_valid() {
            log_warn!("solution in {} L of water overflows, returning empty result", volume);
            snapshot.diagnostics.push(CalcError::InvalidVolume { volume });
            return snapshot;
        }

        snapshot.nutrients = total.rounded();
        snapshot.ec = Some(round2(ec));
        snapshot.ph = Some(round2(base.ph()));
        snapshot.contributions = contributions.per_fertilizer;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fertilizer::{Composition, Fertilizer, FertilizerKind};
    use crate::stages::StageTable;
    use alloc::string::ToString;
    use alloc::vec;

    fn liquid(id: &str, composition: &[(NutrientKey, f64)]) -> Fertilizer {
        Fertilizer {
            id: id.to_string(),
            name: id.to_string(),
            kind: FertilizerKind::Liquid,
            unit: "ml".to_string(),
            description: None,
            composition: Composition::new(composition.iter().copied()),
        }
    }

    #[test]
    fn ec_estimate_uses_coefficients() {
        let stages = StageTable::default();
        let catalog = Catalog::from_entries([liquid("npk", &[
            (NutrientKey::N, 100.0),
            (NutrientKey::K, 50.0),
        ])]);
        let selection = [SelectedFertilizer::new("npk", 1.0)];

        let input = CalculationInput {
            water_volume: 10.0,
            stage: stages.get_or_first("early_veg"),
            sources: &[],
            water_type: WaterType::Ro,
            custom_water: None,
            selection: &selection,
            catalog: &catalog,
        };
        let snapshot = NutrientAggregator::default().calculate(&input);

        // N 10 ppm, K 5 ppm on RO (EC 0.05)
        assert_eq!(snapshot.nutrients.get(NutrientKey::N), 10.0);
        assert_eq!(snapshot.nutrients.get(NutrientKey::K), 5.0);
        assert_eq!(snapshot.ec, Some(round2(0.05 + 10.0 * 0.007 + 5.0 * 0.008)));
        assert_eq!(snapshot.ph, Some(6.5));
        assert!(snapshot.diagnostics.is_empty());
    }

    #[test]
    fn base_precedence() {
        let custom = CustomWaterProfile {
            ca: 80.0,
            base_ec: 0.9,
            ph: 7.8,
            ..CustomWaterProfile::default()
        };
        let mixed = MixedWaterProfile {
            ph: 6.0,
            ec: 0.3,
            ions: NutrientMap::new(),
            total_volume: 5.0,
        };

        let chosen = BaseWater::resolve(Some(mixed.clone()), WaterType::Custom, Some(&custom));
        assert_eq!(chosen, BaseWater::Mixed(mixed));

        let chosen = BaseWater::resolve(None, WaterType::Custom, Some(&custom));
        assert_eq!(chosen.ec(), 0.9);
        assert_eq!(chosen.ions().get(NutrientKey::Ca), 80.0);

        let chosen = BaseWater::resolve(None, WaterType::Tap, Some(&custom));
        assert_eq!(chosen.ph(), 7.5);

        let chosen = BaseWater::resolve(None, WaterType::Custom, None);
        assert_eq!(chosen.ec(), 0.0);
    }

    #[test]
    fn staged_sources_fall_back_and_record_it() {
        let stages = StageTable::default();
        let catalog = Catalog::default();
        let sources = vec![TAP_WATER.to_source("tap", 0.0)];

        let input = CalculationInput {
            water_volume: 10.0,
            stage: stages.get_or_first("early_veg"),
            sources: &sources,
            water_type: WaterType::Ro,
            custom_water: None,
            selection: &[],
            catalog: &catalog,
        };
        let snapshot = NutrientAggregator::default().calculate(&input);

        assert_eq!(snapshot.ec, Some(0.05));
        assert_eq!(snapshot.diagnostics, vec![CalcError::MixingUndefined]);
        assert_eq!(snapshot.nutrients.len(), NutrientKey::ALL.len());
    }

    #[test]
    fn invalid_volume_short_circuits() {
        let stages = StageTable::default();
        let catalog = Catalog::builtin();
        let selection = [SelectedFertilizer::new("biobizz_bio_grow", 2.0)];

        let input = CalculationInput {
            water_volume: 0.0,
            stage: stages.get_or_first("late_flower"),
            sources: &[],
            water_type: WaterType::Tap,
            custom_water: None,
            selection: &selection,
            catalog: &catalog,
        };
        let snapshot = NutrientAggregator::default().calculate(&input);

        assert!(snapshot.is_empty());
        assert!(snapshot.contributions.is_empty());
        assert_eq!(snapshot.stage.id, "late_flower");
        assert_eq!(snapshot.diagnostics, vec![CalcError::InvalidVolume { volume: 0.0 }]);
    }

    #[test]
    fn overflowing_doses_empty_the_snapshot() {
        let stages = StageTable::default();
        let mut powder = liquid("x", &[(NutrientKey::N, 50.0)]);
        powder.kind = FertilizerKind::Powder;
        let catalog = Catalog::from_entries([powder]);
        let selection = [SelectedFertilizer::new("x", 10.0)];

        let input = CalculationInput {
            water_volume: 1e-306,
            stage: stages.get_or_first("early_veg"),
            sources: &[],
            water_type: WaterType::Ro,
            custom_water: None,
            selection: &selection,
            catalog: &catalog,
        };
        let snapshot = NutrientAggregator::default().calculate(&input);

        assert!(snapshot.is_empty());
        assert!(snapshot.contributions.is_empty());
        assert_eq!(
            snapshot.diagnostics,
            vec![CalcError::InvalidVolume { volume: 1e-306 }]
        );
    }

    #[test]
    fn custom_model_changes_ec_only() {
        let stages = StageTable::default();
        let catalog = Catalog::from_entries([liquid("n", &[(NutrientKey::N, 100.0)])]);
        let selection = [SelectedFertilizer::new("n", 1.0)];
        let input = CalculationInput {
            water_volume: 10.0,
            stage: stages.get_or_first("early_veg"),
            sources: &[],
            water_type: WaterType::Ro,
            custom_water: None,
            selection: &selection,
            catalog: &catalog,
        };

        let model = ConductivityModel {
            n: 0.01,
            ..ConductivityModel::default()
        };
        let default_run = NutrientAggregator::default().calculate(&input);
        let custom_run = NutrientAggregator::new_with_model(model).calculate(&input);

        assert_eq!(default_run.nutrients, custom_run.nutrients);
        assert_eq!(custom_run.ec, Some(0.15));
    }
}
