//! Canonical nutrient keys and per-nutrient value maps
//!
//! Every composition, water profile and result is keyed by [`NutrientKey`].
//! Caller-supplied keys ("N", "fe", " Mg ") are normalized once, at the
//! ingestion boundary, through [`NutrientKey::from_str`](core::str::FromStr);
//! past that point the engine never handles raw strings.

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::errors::CalcError;
use crate::traits::Validatable;

/// Canonical nutrient / ion set tracked by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NutrientKey {
    /// Nitrogen
    N,
    /// Phosphorus
    P,
    /// Potassium
    K,
    /// Calcium
    Ca,
    /// Magnesium
    Mg,
    /// Sulfur
    S,
    /// Sodium (water ion, not a fertilizer target)
    Na,
    /// Iron
    Fe,
    /// Manganese
    Mn,
    /// Zinc
    Zn,
    /// Copper
    Cu,
    /// Boron
    B,
    /// Molybdenum
    Mo,
}

/// Display grouping, drives which classification scheme applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NutrientGroup {
    /// N, P, K
    Primary,
    /// Ca, Mg, S
    Secondary,
    /// Fe, Mn, Zn, Cu, B, Mo
    Micro,
    /// Ions carried by source water only
    WaterIon,
}

impl NutrientKey {
    /// All keys in display order
    pub const ALL: [NutrientKey; 13] = [
        Self::N,
        Self::P,
        Self::K,
        Self::Ca,
        Self::Mg,
        Self::S,
        Self::Na,
        Self::Fe,
        Self::Mn,
        Self::Zn,
        Self::Cu,
        Self::B,
        Self::Mo,
    ];

    /// Lower-case key as used in compositions and documents
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::P => "p",
            Self::K => "k",
            Self::Ca => "ca",
            Self::Mg => "mg",
            Self::S => "s",
            Self::Na => "na",
            Self::Fe => "fe",
            Self::Mn => "mn",
            Self::Zn => "zn",
            Self::Cu => "cu",
            Self::B => "b",
            Self::Mo => "mo",
        }
    }

    /// Human readable element name with symbol
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "Nitrogen (N)",
            Self::P => "Phosphorus (P)",
            Self::K => "Potassium (K)",
            Self::Ca => "Calcium (Ca)",
            Self::Mg => "Magnesium (Mg)",
            Self::S => "Sulfur (S)",
            Self::Na => "Sodium (Na)",
            Self::Fe => "Iron (Fe)",
            Self::Mn => "Manganese (Mn)",
            Self::Zn => "Zinc (Zn)",
            Self::Cu => "Copper (Cu)",
            Self::B => "Boron (B)",
            Self::Mo => "Molybdenum (Mo)",
        }
    }

    /// Display group of this key
    pub const fn group(self) -> NutrientGroup {
        match self {
            Self::N | Self::P | Self::K => NutrientGroup::Primary,
            Self::Ca | Self::Mg | Self::S => NutrientGroup::Secondary,
            Self::Na => NutrientGroup::WaterIon,
            Self::Fe | Self::Mn | Self::Zn | Self::Cu | Self::B | Self::Mo => NutrientGroup::Micro,
        }
    }
}

impl fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutrientKey {
    type Err = CalcError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalcError::UnknownNutrient {
                key: raw.to_string(),
            })
    }
}

/// Round to two decimals, non-finite values collapse to 0
pub fn round2(value: f64) -> f64 {
    if !value.is_valid() {
        return 0.0;
    }
    // Past 2^52 every f64 is integral and scaling by 100 may overflow
    if libm::fabs(value) >= EXACT_INTEGER_LIMIT {
        return value;
    }
    libm::round(value * 100.0) / 100.0
}

const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Per-nutrient values (ppm); absent keys read as 0
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NutrientMap {
    values: BTreeMap<NutrientKey, f64>,
}

impl NutrientMap {
    /// Empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Map with every canonical key set to 0
    pub fn zeroed() -> Self {
        NutrientKey::ALL.iter().map(|&key| (key, 0.0)).collect()
    }

    /// Value for `key`, 0 when absent
    pub fn get(&self, key: NutrientKey) -> f64 {
        self.values.get(&key).copied().unwrap_or(0.0)
    }

    /// Value for `key` only if present
    pub fn value(&self, key: NutrientKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Set `key` to `value`
    pub fn set(&mut self, key: NutrientKey, value: f64) {
        self.values.insert(key, value);
    }

    /// Add `amount` on top of the current value
    pub fn add(&mut self, key: NutrientKey, amount: f64) {
        *self.values.entry(key).or_insert(0.0) += amount;
    }

    /// True if `key` is present
    pub fn contains(&self, key: NutrientKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no key is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKey, f64)> + '_ {
        self.values.iter().map(|(&key, &value)| (key, value))
    }

    /// True if no value is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.values.values().all(|value| value.is_valid())
    }

    /// Copy with every value rounded to two decimals
    pub fn rounded(&self) -> Self {
        self.iter().map(|(key, value)| (key, round2(value))).collect()
    }
}

impl FromIterator<(NutrientKey, f64)> for NutrientMap {
    fn from_iter<I: IntoIterator<Item = (NutrientKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
