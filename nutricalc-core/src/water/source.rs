//! Water source records, presets and the editable source list

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::{
    constants::water::{DEFAULT_TAP_VOLUME_L, FALLBACK_WATER, PH_MAX, RO_WATER, TAP_WATER},
    errors::CalcError,
    nutrients::{NutrientKey, NutrientMap},
    time::TimeSource,
    traits::NonNegative,
};

/// Fixed reference profile for a kind of water
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterPreset {
    /// Preset id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// pH
    pub ph: f64,
    /// EC (mS/cm)
    pub ec: f64,
    /// Ion concentrations (mg/L); absent ions are 0
    pub ions: &'static [(NutrientKey, f64)],
}

impl WaterPreset {
    /// Preset by id. Accepts `tap` / `tapWater` and `ro` / `roWater`, any case.
    pub fn by_id(id: &str) -> Option<&'static WaterPreset> {
        let id = id.trim();
        if id.eq_ignore_ascii_case("tap") || id.eq_ignore_ascii_case("tapwater") {
            Some(&TAP_WATER)
        } else if id.eq_ignore_ascii_case("ro") || id.eq_ignore_ascii_case("rowater") {
            Some(&RO_WATER)
        } else {
            None
        }
    }

    /// Ion map of this preset
    pub fn ion_map(&self) -> NutrientMap {
        self.ions.iter().copied().collect()
    }

    /// Concrete source carrying this profile
    pub fn to_source(&self, id: impl Into<String>, volume: f64) -> WaterSource {
        WaterSource {
            id: id.into(),
            name: self.name.to_string(),
            ph: self.ph,
            ec: self.ec,
            ions: self.ion_map(),
            volume: volume.non_negative(),
        }
    }
}

/// One water source in a blend
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterSource {
    /// Unique id within the list
    pub id: String,
    /// Display name
    pub name: String,
    /// pH
    pub ph: f64,
    /// EC (mS/cm)
    pub ec: f64,
    /// Ion concentrations (mg/L)
    pub ions: NutrientMap,
    /// Volume contributed to the blend (L)
    pub volume: f64,
}

impl WaterSource {
    /// Copy with every numeric field coerced to a non-negative number and pH
    /// capped at 14
    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            ph: clamp_ph(self.ph),
            ec: self.ec.non_negative(),
            ions: self
                .ions
                .iter()
                .map(|(key, value)| (key, value.non_negative()))
                .collect(),
            volume: self.volume.non_negative(),
        }
    }
}

/// Numeric field of a [`WaterSource`] addressable by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterField {
    /// pH
    Ph,
    /// EC
    Ec,
    /// Volume
    Volume,
    /// A single ion
    Ion(NutrientKey),
}

impl FromStr for WaterField {
    type Err = CalcError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ph" => Ok(Self::Ph),
            "ec" => Ok(Self::Ec),
            "volume" => Ok(Self::Volume),
            other => other.parse().map(Self::Ion),
        }
    }
}

/// Ordered, editable list of water sources
///
/// The engine never edits sources in place. Every change goes through one of
/// the operations below, and numeric values are coerced to non-negative
/// numbers on the way in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WaterSourceList {
    sources: Vec<WaterSource>,
}

impl Default for WaterSourceList {
    /// Tap water at 100 L plus reverse osmosis staged at 0 L
    fn default() -> Self {
        Self {
            sources: alloc::vec![
                TAP_WATER.to_source(TAP_WATER.id, DEFAULT_TAP_VOLUME_L),
                RO_WATER.to_source(RO_WATER.id, 0.0),
            ],
        }
    }
}

impl WaterSourceList {
    /// List from explicit sources
    pub fn new(sources: impl IntoIterator<Item = WaterSource>) -> Self {
        Self {
            sources: sources.into_iter().map(|source| source.sanitized()).collect(),
        }
    }

    /// Append a source built from `preset`, staged at volume 0
    ///
    /// The id is `<preset>-<timestamp>`; an unknown preset gets a neutral
    /// profile (pH 7.0, EC 0.2, no ions). Returns the new id.
    pub fn add_preset(&mut self, preset: &str, clock: &dyn TimeSource) -> String {
        let profile = WaterPreset::by_id(preset).unwrap_or(&FALLBACK_WATER);

        let mut timestamp = clock.now();
        let mut id = format!("{}-{}", preset, timestamp);
        while self.contains(&id) {
            timestamp = timestamp.wrapping_add(1);
            id = format!("{}-{}", preset, timestamp);
        }

        self.sources.push(profile.to_source(id.clone(), 0.0));
        id
    }

    /// Remove the source with `id`. Returns true if one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.sources.len();
        self.sources.retain(|source| source.id != id);
        self.sources.len() != before
    }

    /// Set one numeric field of the source with `id`
    ///
    /// NaN and negative values are stored as 0. Returns false if no source
    /// has that id.
    pub fn update(&mut self, id: &str, field: WaterField, value: f64) -> bool {
        let Some(source) = self.sources.iter_mut().find(|source| source.id == id) else {
            return false;
        };

        let value = value.non_negative();
        match field {
            WaterField::Ph => source.ph = value.min(PH_MAX),
            WaterField::Ec => source.ec = value,
            WaterField::Volume => source.volume = value,
            WaterField::Ion(key) => source.ions.set(key, value),
        }
        true
    }

    /// Rename the source with `id`
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> bool {
        match self.sources.iter_mut().find(|source| source.id == id) {
            Some(source) => {
                source.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Source by id
    pub fn get(&self, id: &str) -> Option<&WaterSource> {
        self.sources.iter().find(|source| source.id == id)
    }

    /// True if a source has `id`
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Sources in list order
    pub fn as_slice(&self) -> &[WaterSource] {
        &self.sources
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// True if the list is empty
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Discrete water type used when no blend is available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WaterType {
    /// Reverse osmosis
    #[default]
    Ro,
    /// Municipal tap water
    Tap,
    /// Manually entered profile
    Custom,
}

impl WaterType {
    /// Id as used in documents
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ro => "ro",
            Self::Tap => "tap",
            Self::Custom => "custom",
        }
    }

    /// Preset for this type; `Custom` has none
    pub fn preset(self) -> Option<&'static WaterPreset> {
        match self {
            Self::Ro => Some(&RO_WATER),
            Self::Tap => Some(&TAP_WATER),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaterType {
    type Err = CalcError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("custom") {
            return Ok(Self::Custom);
        }
        match WaterPreset::by_id(raw) {
            Some(preset) if preset.id == TAP_WATER.id => Ok(Self::Tap),
            Some(_) => Ok(Self::Ro),
            None => Err(CalcError::UnknownWaterType { id: raw.to_string() }),
        }
    }
}

/// Manually entered water analysis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomWaterProfile {
    /// Calcium (mg/L)
    pub ca: f64,
    /// Magnesium (mg/L)
    pub mg: f64,
    /// Sulfur (mg/L)
    pub s: f64,
    /// Sodium (mg/L)
    pub na: f64,
    /// Base EC (mS/cm)
    pub base_ec: f64,
    /// pH; 0 when the analysis did not include it
    pub ph: f64,
}

/// pH coerced onto the 0 to 14 scale
pub(crate) fn clamp_ph(ph: f64) -> f64 {
    ph.non_negative().min(PH_MAX)
}

impl CustomWaterProfile {
    /// Ion map of this profile, values coerced to non-negative numbers
    pub fn ion_map(&self) -> NutrientMap {
        [
            (NutrientKey::Ca, self.ca),
            (NutrientKey::Mg, self.mg),
            (NutrientKey::S, self.s),
            (NutrientKey::Na, self.na),
        ]
        .into_iter()
        .map(|(key, value)| (key, value.non_negative()))
        .collect()
    }
}
