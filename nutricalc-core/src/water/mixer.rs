//! Volume-weighted blending of water sources

use crate::{
    nutrients::NutrientMap,
    traits::NonNegative,
};

use super::{source::clamp_ph, WaterSource};

/// Blended characteristics of all sources carrying volume
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixedWaterProfile {
    /// pH mixed through hydrogen-ion concentration
    pub ph: f64,
    /// Volume-weighted EC (mS/cm)
    pub ec: f64,
    /// Volume-weighted ion concentrations (mg/L)
    pub ions: NutrientMap,
    /// Sum of all source volumes (L)
    pub total_volume: f64,
}

/// Stateless water blender
pub struct WaterMixer;

impl WaterMixer {
    /// Blend `sources`
    ///
    /// Sources at volume 0 carry no weight and pH is read on the 0 to 14
    /// scale. Returns `None` when the total volume is 0, including for an
    /// empty list.
    pub fn mix(sources: &[WaterSource]) -> Option<MixedWaterProfile> {
        let mut total_volume = 0.0;
        let mut weighted_h = 0.0;
        let mut weighted_ec = 0.0;
        let mut weighted_ions = NutrientMap::new();

        for source in sources {
            let volume = source.volume.non_negative();
            if volume == 0.0 {
                continue;
            }

            total_volume += volume;
            weighted_h += libm::pow(10.0, -clamp_ph(source.ph)) * volume;
            weighted_ec += source.ec.non_negative() * volume;
            for (key, value) in source.ions.iter() {
                weighted_ions.add(key, value.non_negative() * volume);
            }
        }

        if total_volume == 0.0 {
            log_debug!("water sources carry no volume, nothing to mix");
            return None;
        }

        let ions = weighted_ions
            .iter()
            .map(|(key, weighted)| (key, weighted / total_volume))
            .collect();

        Some(MixedWaterProfile {
            ph: -libm::log10(weighted_h / total_volume),
            ec: weighted_ec / total_volume,
            ions,
            total_volume,
        })
    }
}
