//! Growth stage profiles
//!
//! A [`GrowthStageProfile`] carries the optimal bands for one phenological
//! stage. [`StageTable`] is the keyed collection supplied to the engine; the
//! default table holds the five built-in stages from
//! [`constants::stages`](crate::constants::stages).

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    classify::Band,
    constants::stages::{StageBands, GROWTH_STAGES, MICRO_BANDS, SECONDARY_BANDS},
    errors::{CalcError, CalcResult},
    nutrients::NutrientKey,
};

/// Optimal bands for a single growth stage
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthStageProfile {
    /// Stage id
    pub id: String,
    /// Display name
    pub name: String,
    /// Per-nutrient bands; nutrients without a band classify as unknown
    pub bands: BTreeMap<NutrientKey, Band>,
    /// EC band (mS/cm)
    pub ec: Band,
    /// pH band
    pub ph: Band,
}

impl GrowthStageProfile {
    /// Band for `key`, if the stage defines one
    pub fn band(&self, key: NutrientKey) -> Option<Band> {
        self.bands.get(&key).copied()
    }
}

impl From<&StageBands> for GrowthStageProfile {
    fn from(stage: &StageBands) -> Self {
        let mut bands = BTreeMap::new();
        bands.insert(NutrientKey::N, stage.n);
        bands.insert(NutrientKey::P, stage.p);
        bands.insert(NutrientKey::K, stage.k);
        bands.extend(SECONDARY_BANDS.iter().copied());
        bands.extend(MICRO_BANDS.iter().copied());

        Self {
            id: stage.id.to_string(),
            name: stage.name.to_string(),
            bands,
            ec: stage.ec,
            ph: stage.ph,
        }
    }
}

/// Ordered table of growth stages keyed by id. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTable {
    stages: Vec<GrowthStageProfile>,
}

impl Default for StageTable {
    fn default() -> Self {
        Self {
            stages: GROWTH_STAGES.iter().map(GrowthStageProfile::from).collect(),
        }
    }
}

impl StageTable {
    /// Table from explicit profiles. Later duplicates of an id replace earlier ones.
    ///
    /// No profiles at all gives the default table.
    pub fn new(profiles: impl IntoIterator<Item = GrowthStageProfile>) -> Self {
        let mut stages: Vec<GrowthStageProfile> = Vec::new();
        for profile in profiles {
            match stages.iter_mut().find(|existing| existing.id == profile.id) {
                Some(existing) => *existing = profile,
                None => stages.push(profile),
            }
        }
        if stages.is_empty() {
            log_warn!("no growth stages supplied, using the built-in table");
            return Self::default();
        }
        Self { stages }
    }

    /// Stage by id
    pub fn get(&self, id: &str) -> CalcResult<&GrowthStageProfile> {
        self.stages
            .iter()
            .find(|stage| stage.id == id)
            .ok_or_else(|| CalcError::UnknownStage { id: id.to_string() })
    }

    /// Stage by id, falling back to the first stage
    pub fn get_or_first(&self, id: &str) -> &GrowthStageProfile {
        match self.get(id) {
            Ok(stage) => stage,
            Err(_) => {
                log_debug!("unknown growth stage '{}', using first stage", id);
                // `new` never leaves the table empty
                &self.stages[0]
            }
        }
    }

    /// Id of the first stage
    pub fn first_id(&self) -> Option<&str> {
        self.stages.first().map(|stage| stage.id.as_str())
    }

    /// True if `id` names a stage
    pub fn contains(&self, id: &str) -> bool {
        self.stages.iter().any(|stage| stage.id == id)
    }

    /// Stages in table order
    pub fn iter(&self) -> impl Iterator<Item = &GrowthStageProfile> {
        self.stages.iter()
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True if the table holds no stage
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
