//! Dose-to-concentration conversion
//!
//! ```text
//! ppm = composition × amount × dose_factor / water_volume
//! ```
//!
//! `dose_factor` is 10 for powders (grams of a percent-by-weight product) and
//! 1 for liquids (millilitres of a mg/mL product). Contributions are kept per
//! product for breakdown display as well as folded into a running total.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    errors::CalcError,
    nutrients::NutrientMap,
    traits::{NonNegative, Validatable},
};

use super::{Catalog, Fertilizer, SelectedFertilizer};

/// Result of converting a whole selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contributions {
    /// Per-product ppm, keyed by catalog id
    pub per_fertilizer: BTreeMap<String, NutrientMap>,
    /// Sum over all products
    pub total: NutrientMap,
    /// Skipped entries and other degradations
    pub diagnostics: Vec<CalcError>,
}

/// Stateless converter from doses to ppm
pub struct ContributionCalculator;

impl ContributionCalculator {
    /// ppm contributed by `amount` of `fertilizer` in `water_volume` liters
    ///
    /// Zero composition entries are left out of the map. Returns an empty map
    /// for a non-positive volume or amount. A volume too small for the dose
    /// yields infinite values; [`calculate`](Self::calculate) rejects those.
    pub fn contribution(fertilizer: &Fertilizer, amount: f64, water_volume: f64) -> NutrientMap {
        let amount = amount.non_negative();
        if !water_volume.is_valid() || water_volume <= 0.0 || amount == 0.0 {
            return NutrientMap::new();
        }

        let factor = fertilizer.kind.dose_factor();
        fertilizer
            .composition
            .nonzero()
            .map(|(key, value)| (key, value * amount * factor / water_volume))
            .collect()
    }

    /// Convert every dosed entry of `selection`
    ///
    /// Inactive and zero-amount entries are ignored. Ids missing from
    /// `catalog` are skipped and recorded. A product selected twice has both
    /// doses summed under its id. If any concentration overflows, the volume
    /// is treated as invalid: all contributions are dropped and
    /// `InvalidVolume` is recorded.
    pub fn calculate(
        selection: &[SelectedFertilizer],
        catalog: &Catalog,
        water_volume: f64,
    ) -> Contributions {
        let mut result = Contributions::default();

        if !water_volume.is_valid() || water_volume <= 0.0 {
            result.diagnostics.push(CalcError::InvalidVolume { volume: water_volume });
            return result;
        }

        for entry in selection.iter().filter(|entry| entry.is_dosed()) {
            let Some(fertilizer) = catalog.get(&entry.id) else {
                log_warn!("selected fertilizer '{}' not in catalog, skipping", entry.id);
                result
                    .diagnostics
                    .push(CalcError::UnresolvedFertilizer { id: entry.id.clone() });
                continue;
            };

            let ppm = Self::contribution(fertilizer, entry.amount, water_volume);
            let breakdown = result.per_fertilizer.entry(entry.id.clone()).or_default();
            for (key, value) in ppm.iter() {
                breakdown.add(key, value);
                result.total.add(key, value);
            }
        }

        if !result.total.is_finite() {
            log_warn!("doses overflow in {} L of water, returning no contributions", water_volume);
            result.per_fertilizer.clear();
            result.total = NutrientMap::new();
            result.diagnostics.push(CalcError::InvalidVolume { volume: water_volume });
        }

        result
    }
}
