//! Fertilizer records and the merged catalog

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::{
    constants::{
        dosing::{LIQUID_DOSE_FACTOR, POWDER_DOSE_FACTOR},
        fertilizers::{BuiltinFertilizer, BUILTIN_FERTILIZERS},
    },
    nutrients::{NutrientKey, NutrientMap},
    time::TimeSource,
    traits::NonNegative,
};

/// Unit given to custom products that do not name one
pub const DEFAULT_CUSTOM_UNIT: &str = "ml";

/// Description given to custom products that do not carry one
pub const DEFAULT_CUSTOM_DESCRIPTION: &str = "Custom fertilizer";

/// Dose form of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FertilizerKind {
    /// Dosed in mL, composition in mg/mL
    #[default]
    Liquid,
    /// Dosed in g, composition in percent by weight
    Powder,
}

impl FertilizerKind {
    /// Factor turning `composition × amount` into mg
    pub const fn dose_factor(self) -> f64 {
        match self {
            Self::Liquid => LIQUID_DOSE_FACTOR,
            Self::Powder => POWDER_DOSE_FACTOR,
        }
    }

    /// Lenient parse: `powder` in any case is a powder, everything else liquid
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("powder") {
            Self::Powder
        } else {
            Self::Liquid
        }
    }

    /// Lower-case name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Powder => "powder",
        }
    }
}

impl fmt::Display for FertilizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared elemental composition of a product
///
/// Keys are canonical and values non-negative. Zero entries may be present;
/// they contribute nothing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Composition {
    values: NutrientMap,
}

impl Composition {
    /// Composition from canonical keys
    pub fn new(values: impl IntoIterator<Item = (NutrientKey, f64)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (key, value.non_negative()))
                .collect(),
        }
    }

    /// Composition from caller-supplied keys
    ///
    /// Keys are matched case-insensitively; keys outside the canonical set
    /// are dropped. A key repeated in another casing overwrites the earlier
    /// value.
    pub fn from_raw<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut values = NutrientMap::new();
        for (raw, value) in entries {
            match raw.parse::<NutrientKey>() {
                Ok(key) => values.set(key, value.non_negative()),
                Err(_) => {
                    log_debug!("dropping unknown composition key '{}'", raw);
                }
            }
        }
        Self { values }
    }

    /// Declared value for `key`, 0 when absent
    pub fn get(&self, key: NutrientKey) -> f64 {
        self.values.get(key)
    }

    /// Entries with a value above 0
    pub fn nonzero(&self) -> impl Iterator<Item = (NutrientKey, f64)> + '_ {
        self.values.iter().filter(|&(_, value)| value > 0.0)
    }

    /// All entries, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKey, f64)> + '_ {
        self.values.iter()
    }

    /// True if nothing is declared above 0
    pub fn is_empty(&self) -> bool {
        self.nonzero().next().is_none()
    }
}

/// A resolved catalog entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fertilizer {
    /// Catalog id
    pub id: String,
    /// Product name
    pub name: String,
    /// Dose form
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: FertilizerKind,
    /// Dose unit shown to the user
    pub unit: String,
    /// Free text
    pub description: Option<String>,
    /// Declared composition
    pub composition: Composition,
}

impl From<&BuiltinFertilizer> for Fertilizer {
    fn from(row: &BuiltinFertilizer) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name.to_string(),
            kind: row.kind,
            unit: row.unit.to_string(),
            description: None,
            composition: Composition::new(row.composition.iter().copied()),
        }
    }
}

/// User-defined product as entered, before merging
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFertilizer {
    /// Explicit id; a missing or empty id is generated on merge
    pub id: Option<String>,
    /// Product name
    pub name: String,
    /// Dose form, liquid when absent
    pub kind: Option<FertilizerKind>,
    /// Dose unit, `ml` when absent
    pub unit: Option<String>,
    /// Free text
    pub description: Option<String>,
    /// Composition with raw keys in any casing
    pub composition: Vec<(String, f64)>,
}

impl CustomFertilizer {
    /// Custom product with a name and nothing else
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add one raw composition entry
    pub fn with_entry(mut self, key: impl Into<String>, value: f64) -> Self {
        self.composition.push((key.into(), value));
        self
    }

    /// Set the dose form
    pub fn with_kind(mut self, kind: FertilizerKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set an explicit id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Lower-case name with every whitespace run replaced by `_`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('_');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// Merged, read-only fertilizer lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<String, Fertilizer>,
}

impl Catalog {
    /// The built-in product table
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_FERTILIZERS
                .iter()
                .map(|row| (row.id.to_string(), Fertilizer::from(row)))
                .collect(),
        }
    }

    /// Catalog from resolved entries. Later duplicates of an id win.
    pub fn from_entries(entries: impl IntoIterator<Item = Fertilizer>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|fertilizer| (fertilizer.id.clone(), fertilizer))
                .collect(),
        }
    }

    /// New catalog holding `base` plus `custom`
    ///
    /// `base` is left untouched. Custom entries without an id receive
    /// `custom_<slug>_<timestamp>`, with the timestamp bumped until the id is
    /// free. A custom entry whose id already exists replaces that entry.
    pub fn merge(base: &Catalog, custom: &[CustomFertilizer], clock: &dyn TimeSource) -> Catalog {
        let mut entries = base.entries.clone();

        for product in custom {
            let id = match product.explicit_id() {
                Some(id) => id.to_string(),
                None => generate_id(&product.name, clock, |candidate| {
                    entries.contains_key(candidate)
                }),
            };

            if base.contains(&id) {
                log_debug!("custom fertilizer '{}' overrides built-in entry", id);
            }

            let composition =
                Composition::from_raw(product.composition.iter().map(|(k, v)| (k.as_str(), *v)));
            let fertilizer = Fertilizer {
                id: id.clone(),
                name: product.name.clone(),
                kind: product.kind.unwrap_or_default(),
                unit: product
                    .unit
                    .clone()
                    .filter(|unit| !unit.is_empty())
                    .unwrap_or_else(|| DEFAULT_CUSTOM_UNIT.to_string()),
                description: Some(
                    product
                        .description
                        .clone()
                        .filter(|text| !text.is_empty())
                        .unwrap_or_else(|| DEFAULT_CUSTOM_DESCRIPTION.to_string()),
                ),
                composition,
            };
            entries.insert(id, fertilizer);
        }

        Catalog { entries }
    }

    /// Entry by id
    pub fn get(&self, id: &str) -> Option<&Fertilizer> {
        self.entries.get(id)
    }

    /// True if `id` resolves
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Entries ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &Fertilizer> {
        self.entries.values()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn generate_id(name: &str, clock: &dyn TimeSource, taken: impl Fn(&str) -> bool) -> String {
    let slug = slugify(name);
    let mut timestamp = clock.now();
    loop {
        let candidate = format!("custom_{}_{}", slug, timestamp);
        if !taken(&candidate) {
            return candidate;
        }
        timestamp = timestamp.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{FixedTime, MockTimeSource};
    use alloc::vec;

    #[test]
    fn builtin_table_loads() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_FERTILIZERS.len());

        let calmag = catalog.get("atami_ata_calmag").unwrap();
        assert_eq!(calmag.kind, FertilizerKind::Liquid);
        assert!(calmag.composition.get(NutrientKey::Ca) > 0.0);
    }

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(slugify("My  Bloom\tBooster"), "my_bloom_booster");
        assert_eq!(slugify("CalMag"), "calmag");
    }

    #[test]
    fn merge_generates_ids_and_defaults() {
        let base = Catalog::builtin();
        let custom = vec![CustomFertilizer::named("Home Brew").with_entry("N", 5.0)];
        let merged = Catalog::merge(&base, &custom, &FixedTime::new(42));

        let entry = merged.get("custom_home_brew_42").unwrap();
        assert_eq!(entry.kind, FertilizerKind::Liquid);
        assert_eq!(entry.unit, "ml");
        assert_eq!(entry.description.as_deref(), Some("Custom fertilizer"));
        assert_eq!(entry.composition.get(NutrientKey::N), 5.0);
        assert_eq!(merged.len(), base.len() + 1);
    }

    #[test]
    fn merge_never_touches_base() {
        let base = Catalog::builtin();
        let snapshot = base.clone();
        let custom = vec![CustomFertilizer::named("x").with_id("atami_ata_calmag")];

        let merged = Catalog::merge(&base, &custom, &FixedTime::new(1));
        assert_eq!(base, snapshot);
        assert_eq!(merged.get("atami_ata_calmag").unwrap().name, "x");
        assert_eq!(merged.len(), base.len());
    }

    #[test]
    fn identical_names_on_frozen_clock_stay_unique() {
        let custom = vec![CustomFertilizer::named("Same"); 3];
        let merged = Catalog::merge(&Catalog::default(), &custom, &FixedTime::new(7));

        assert_eq!(merged.len(), 3);
        assert!(merged.contains("custom_same_7"));
        assert!(merged.contains("custom_same_8"));
        assert!(merged.contains("custom_same_9"));
    }

    #[test]
    fn composition_keys_are_normalized() {
        let custom = vec![CustomFertilizer::named("Mixed case")
            .with_entry("FE", 0.5)
            .with_entry(" Mg", 3.0)
            .with_entry("no3", 10.0)
            .with_entry("K", -4.0)];
        let merged = Catalog::merge(&Catalog::default(), &custom, &MockTimeSource::new(0));
        let composition = &merged.iter().next().unwrap().composition;

        assert_eq!(composition.get(NutrientKey::Fe), 0.5);
        assert_eq!(composition.get(NutrientKey::Mg), 3.0);
        assert_eq!(composition.get(NutrientKey::K), 0.0);
        assert_eq!(composition.nonzero().count(), 2);
    }

    #[test]
    fn empty_id_is_generated() {
        let custom = vec![CustomFertilizer::named("Blank").with_id("")];
        let merged = Catalog::merge(&Catalog::default(), &custom, &FixedTime::new(3));
        assert!(merged.contains("custom_blank_3"));
    }

    #[test]
    fn powder_factor() {
        assert_eq!(FertilizerKind::Powder.dose_factor(), 10.0);
        assert_eq!(FertilizerKind::Liquid.dose_factor(), 1.0);
        assert_eq!(FertilizerKind::from_label("POWDER"), FertilizerKind::Powder);
        assert_eq!(FertilizerKind::from_label("granular"), FertilizerKind::Liquid);
    }
}
