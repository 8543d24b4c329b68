//! Setup document import, export and conversion to engine inputs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use nutricalc_core::{
    fertilizer::{CustomFertilizer, FertilizerKind},
    time::TimeSource,
    traits::NonNegative,
    CalcError, CalculationInput, Catalog, CustomWaterProfile, GrowthStageProfile,
    SelectedFertilizer, StageTable, WaterSource, WaterType,
};

use crate::{
    coerce::{non_empty_str, number, number_or, number_or_zero, truthy},
    SchemaError, SchemaResult,
};

/// Envelope version written on export
pub const EXPORT_VERSION: &str = "1.0";

/// Volume used when a document has none, or 0
pub const DEFAULT_WATER_VOLUME_L: f64 = 10.0;

/// Water type used when a document has none
pub const DEFAULT_WATER_TYPE: &str = "ro";

/// A saved setup, with every field defaulted and coerced
#[derive(Debug, Clone, PartialEq)]
pub struct SetupDocument {
    /// Solution volume (L). Negative values survive import; validation flags them.
    pub water_volume: f64,
    /// Growth stage id as written
    pub growth_stage: String,
    /// Water type id as written
    pub water_type: String,
    /// Dosed products
    pub selected_fertilizers: Vec<SelectedFertilizer>,
    /// Manual water analysis
    pub custom_water_profile: CustomWaterProfile,
    /// User-defined products
    pub custom_fertilizers: Vec<CustomFertilizer>,
}

/// Result of an import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedSetup {
    /// The coerced document
    pub document: SetupDocument,
    /// Envelope version, if the document was wrapped
    pub version: Option<String>,
    /// Envelope timestamp, if present and readable
    pub exported_at: Option<DateTime<Utc>>,
    /// Values that could not be read as numbers and were replaced by 0
    pub diagnostics: Vec<CalcError>,
}

/// Owned engine inputs derived from a document
#[derive(Debug, Clone)]
pub struct EngineInputs {
    /// Solution volume (L)
    pub water_volume: f64,
    /// Resolved growth stage
    pub stage: GrowthStageProfile,
    /// Resolved water type
    pub water_type: WaterType,
    /// Manual water analysis
    pub custom_water: CustomWaterProfile,
    /// Dosed products
    pub selection: Vec<SelectedFertilizer>,
    /// Base catalog merged with the document's custom products
    pub catalog: Catalog,
}

impl EngineInputs {
    /// Borrow as a calculation input over `sources`
    pub fn input<'a>(&'a self, sources: &'a [WaterSource]) -> CalculationInput<'a> {
        CalculationInput {
            water_volume: self.water_volume,
            stage: &self.stage,
            sources,
            water_type: self.water_type,
            custom_water: Some(&self.custom_water),
            selection: &self.selection,
            catalog: &self.catalog,
        }
    }
}

impl SetupDocument {
    /// Document with import defaults for `stages`
    pub fn new(stages: &StageTable) -> Self {
        Self {
            water_volume: DEFAULT_WATER_VOLUME_L,
            growth_stage: stages.first_id().unwrap_or_default().to_string(),
            water_type: DEFAULT_WATER_TYPE.to_string(),
            selected_fertilizers: Vec::new(),
            custom_water_profile: CustomWaterProfile::default(),
            custom_fertilizers: Vec::new(),
        }
    }

    /// Parse a document, wrapped in an export envelope or bare
    ///
    /// Fails only if the text is not JSON or not an object. Everything else
    /// is defaulted; see [`ImportedSetup::diagnostics`].
    pub fn parse(json: &str, stages: &StageTable) -> SchemaResult<ImportedSetup> {
        let root: Value = serde_json::from_str(json)?;
        Self::from_value(&root, stages)
    }

    /// Like [`parse`](Self::parse), from an already parsed value
    pub fn from_value(root: &Value, stages: &StageTable) -> SchemaResult<ImportedSetup> {
        let envelope = root.as_object().ok_or(SchemaError::NotAnObject)?;

        let data = match envelope.get("data") {
            Some(Value::Object(data)) => data,
            _ => envelope,
        };
        let wrapped = !std::ptr::eq(data, envelope);

        let version = if wrapped {
            non_empty_str(envelope.get("version")).map(str::to_string)
        } else {
            None
        };
        if let Some(version) = version.as_deref().filter(|v| *v != EXPORT_VERSION) {
            warn!("importing setup written by version {}, expected {}", version, EXPORT_VERSION);
        }
        let exported_at = if wrapped {
            non_empty_str(envelope.get("timestamp")).and_then(|ts| ts.parse::<DateTime<Utc>>().ok())
        } else {
            None
        };

        let mut diagnostics = Vec::new();
        let defaults = Self::new(stages);

        let document = Self {
            water_volume: number_or(data.get("waterVolume"), DEFAULT_WATER_VOLUME_L),
            growth_stage: non_empty_str(data.get("growthStage"))
                .map_or(defaults.growth_stage, str::to_string),
            water_type: non_empty_str(data.get("waterType"))
                .map_or(defaults.water_type, str::to_string),
            selected_fertilizers: read_selection(data.get("selectedFertilizers")),
            custom_water_profile: read_water_profile(
                data.get("customWaterProfile"),
                &mut diagnostics,
            ),
            custom_fertilizers: read_custom_fertilizers(
                data.get("customFertilizers"),
                &mut diagnostics,
            ),
        };

        Ok(ImportedSetup {
            document,
            version,
            exported_at,
            diagnostics,
        })
    }

    /// Bare document JSON
    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(&SetupData::from(self))?)
    }

    /// Enveloped document JSON stamped with `timestamp`
    pub fn export(&self, timestamp: DateTime<Utc>) -> SchemaResult<String> {
        let envelope = ExportEnvelope {
            version: EXPORT_VERSION.to_string(),
            timestamp,
            data: SetupData::from(self),
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    /// Enveloped document JSON stamped with the current time of `clock`
    pub fn export_now(&self, clock: &dyn TimeSource) -> SchemaResult<String> {
        let ms = clock.now();
        let timestamp = i64::try_from(ms)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or(SchemaError::InvalidTimestamp(ms))?;
        self.export(timestamp)
    }

    /// Resolve the document against a catalog and stage table
    ///
    /// Fails for a stage id missing from `stages` or an unknown water type.
    /// Custom products are merged on top of `base`, which is not modified.
    pub fn engine_inputs(
        &self,
        base: &Catalog,
        stages: &StageTable,
        clock: &dyn TimeSource,
    ) -> SchemaResult<EngineInputs> {
        let stage = stages.get(&self.growth_stage)?.clone();
        let water_type: WaterType = self.water_type.parse()?;
        let catalog = Catalog::merge(base, &self.custom_fertilizers, clock);
        debug!(
            "setup resolved: stage {}, water {}, {} products in catalog",
            stage.id,
            water_type,
            catalog.len()
        );

        Ok(EngineInputs {
            water_volume: self.water_volume,
            stage,
            water_type,
            custom_water: self.custom_water_profile,
            selection: self.selected_fertilizers.clone(),
            catalog,
        })
    }
}

fn read_selection(value: Option<&Value>) -> Vec<SelectedFertilizer> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let Some(id) = non_empty_str(item.get("id")) else {
                debug!("skipping selection entry without id");
                return None;
            };
            let amount = item.get("amount").and_then(number).unwrap_or(0.0);
            Some(SelectedFertilizer {
                id: id.to_string(),
                amount: amount.non_negative(),
                active: truthy(item.get("active")),
            })
        })
        .collect()
}

fn read_water_profile(
    value: Option<&Value>,
    diagnostics: &mut Vec<CalcError>,
) -> CustomWaterProfile {
    let Some(Value::Object(fields)) = value else {
        return CustomWaterProfile::default();
    };

    let mut field = |key: &str| {
        let (value, malformed) = number_or_zero(fields.get(key));
        if malformed {
            diagnostics.push(CalcError::MalformedComposition { key: key.to_string() });
        }
        value
    };

    CustomWaterProfile {
        ca: field("ca"),
        mg: field("mg"),
        s: field("s"),
        na: field("na"),
        base_ec: field("baseEC"),
        ph: field("ph"),
    }
}

fn read_custom_fertilizers(
    value: Option<&Value>,
    diagnostics: &mut Vec<CalcError>,
) -> Vec<CustomFertilizer> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|fields| read_custom_fertilizer(fields, diagnostics))
        .collect()
}

fn read_custom_fertilizer(
    fields: &Map<String, Value>,
    diagnostics: &mut Vec<CalcError>,
) -> CustomFertilizer {
    let text = |key: &str| non_empty_str(fields.get(key)).map(str::to_string);

    let composition = match fields.get("composition") {
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(key, raw)| {
                let (value, malformed) = number_or_zero(Some(raw));
                if malformed {
                    diagnostics.push(CalcError::MalformedComposition { key: key.clone() });
                }
                (key.clone(), value)
            })
            .collect(),
        _ => Vec::new(),
    };

    CustomFertilizer {
        id: text("id"),
        name: text("name").unwrap_or_default(),
        kind: non_empty_str(fields.get("type")).map(FertilizerKind::from_label),
        unit: text("unit"),
        description: text("description"),
        composition,
    }
}

/// Export envelope
#[derive(Debug, Serialize, Deserialize)]
struct ExportEnvelope {
    version: String,
    timestamp: DateTime<Utc>,
    data: SetupData,
}

/// Document as written on export
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetupData {
    water_volume: f64,
    growth_stage: String,
    water_type: String,
    selected_fertilizers: Vec<SelectedFertilizer>,
    custom_water_profile: WaterProfileData,
    custom_fertilizers: Vec<CustomFertilizerData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WaterProfileData {
    ca: f64,
    mg: f64,
    s: f64,
    na: f64,
    #[serde(rename = "baseEC")]
    base_ec: f64,
    ph: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct CustomFertilizerData {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<FertilizerKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    composition: BTreeMap<String, f64>,
}

impl From<&SetupDocument> for SetupData {
    fn from(document: &SetupDocument) -> Self {
        let profile = &document.custom_water_profile;
        Self {
            water_volume: document.water_volume,
            growth_stage: document.growth_stage.clone(),
            water_type: document.water_type.clone(),
            selected_fertilizers: document.selected_fertilizers.clone(),
            custom_water_profile: WaterProfileData {
                ca: profile.ca,
                mg: profile.mg,
                s: profile.s,
                na: profile.na,
                base_ec: profile.base_ec,
                ph: profile.ph,
            },
            custom_fertilizers: document
                .custom_fertilizers
                .iter()
                .map(|product| CustomFertilizerData {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    kind: product.kind,
                    unit: product.unit.clone(),
                    description: product.description.clone(),
                    composition: product.composition.iter().cloned().collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nutricalc_core::time::FixedTime;

    fn stages() -> StageTable {
        StageTable::default()
    }

    #[test]
    fn empty_object_gets_defaults() {
        let imported = SetupDocument::parse("{}", &stages()).unwrap();
        let doc = imported.document;

        assert_eq!(doc.water_volume, 10.0);
        assert_eq!(doc.growth_stage, "early_veg");
        assert_eq!(doc.water_type, "ro");
        assert!(doc.selected_fertilizers.is_empty());
        assert_eq!(doc.custom_water_profile, CustomWaterProfile::default());
        assert!(imported.version.is_none());
    }

    #[test]
    fn not_an_object_is_rejected() {
        assert!(matches!(
            SetupDocument::parse("[1, 2]", &stages()),
            Err(SchemaError::NotAnObject)
        ));
        assert!(matches!(
            SetupDocument::parse("{ nope", &stages()),
            Err(SchemaError::ParseError(_))
        ));
    }

    #[test]
    fn envelope_is_unwrapped() {
        let json = r#"{
            "version": "1.0",
            "timestamp": "2024-03-01T12:00:00Z",
            "data": { "waterVolume": 25, "waterType": "tap" }
        }"#;
        let imported = SetupDocument::parse(json, &stages()).unwrap();

        assert_eq!(imported.version.as_deref(), Some("1.0"));
        assert_eq!(
            imported.exported_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(imported.document.water_volume, 25.0);
        assert_eq!(imported.document.water_type, "tap");
    }

    #[test]
    fn coerces_browser_style_values() {
        let json = r#"{
            "waterVolume": "0",
            "selectedFertilizers": [
                { "id": "biobizz_bio_grow", "amount": "2.5", "active": true },
                { "id": "biobizz_calmag", "amount": "", "active": 1 },
                { "id": "athena_pro_core", "amount": -1 },
                { "amount": 3 }
            ],
            "customWaterProfile": { "ca": "40", "mg": null, "baseEC": "0.3", "cl": 12, "ph": "high" }
        }"#;
        let imported = SetupDocument::parse(json, &stages()).unwrap();
        let doc = &imported.document;

        assert_eq!(doc.water_volume, 10.0);
        assert_eq!(doc.selected_fertilizers.len(), 3);
        assert_eq!(doc.selected_fertilizers[0].amount, 2.5);
        assert_eq!(doc.selected_fertilizers[1].amount, 0.0);
        assert!(doc.selected_fertilizers[1].active);
        assert_eq!(doc.selected_fertilizers[2].amount, 0.0);
        assert!(!doc.selected_fertilizers[2].active);

        assert_eq!(doc.custom_water_profile.ca, 40.0);
        assert_eq!(doc.custom_water_profile.base_ec, 0.3);
        assert_eq!(doc.custom_water_profile.ph, 0.0);
        assert_eq!(
            imported.diagnostics,
            vec![CalcError::MalformedComposition { key: "ph".to_string() }]
        );
    }

    #[test]
    fn custom_fertilizers_are_read() {
        let json = r#"{
            "customFertilizers": [
                { "name": "Worm Tea", "type": "powder", "composition": { "N": "2", "Fe": 0.1, "x": "?" } },
                "not an object"
            ]
        }"#;
        let imported = SetupDocument::parse(json, &stages()).unwrap();
        let products = &imported.document.custom_fertilizers;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].kind, Some(FertilizerKind::Powder));
        assert!(products[0].id.is_none());
        assert!(products[0].composition.contains(&("N".to_string(), 2.0)));
        assert_eq!(imported.diagnostics.len(), 1);
    }

    #[test]
    fn export_then_import_keeps_document() {
        let mut doc = SetupDocument::new(&stages());
        doc.water_volume = 42.0;
        doc.growth_stage = "mid_flower".to_string();
        doc.selected_fertilizers.push(SelectedFertilizer::new("biobizz_bio_bloom", 3.0));
        doc.custom_fertilizers.push(
            CustomFertilizer::named("Kelp")
                .with_id("custom_kelp_1")
                .with_entry("k", 4.0),
        );

        let json = doc.export_now(&FixedTime::new(1_709_294_400_000)).unwrap();
        let imported = SetupDocument::parse(&json, &stages()).unwrap();

        assert_eq!(imported.document, doc);
        assert_eq!(imported.version.as_deref(), Some(EXPORT_VERSION));
        assert!(imported.exported_at.is_some());
    }

    #[test]
    fn engine_inputs_resolve_and_merge() {
        let mut doc = SetupDocument::new(&stages());
        doc.water_type = "custom".to_string();
        doc.custom_fertilizers.push(CustomFertilizer::named("Kelp").with_entry("K", 4.0));

        let base = Catalog::builtin();
        let inputs = doc.engine_inputs(&base, &stages(), &FixedTime::new(5)).unwrap();

        assert_eq!(inputs.water_type, WaterType::Custom);
        assert!(inputs.catalog.contains("custom_kelp_5"));
        assert_eq!(inputs.catalog.len(), base.len() + 1);
        assert_eq!(inputs.stage.id, "early_veg");
    }

    #[test]
    fn engine_inputs_reject_unknown_ids() {
        let mut doc = SetupDocument::new(&stages());
        doc.growth_stage = "vegetative".to_string();
        let err = doc
            .engine_inputs(&Catalog::builtin(), &stages(), &FixedTime::new(0))
            .unwrap_err();
        assert!(matches!(err, SchemaError::Engine(CalcError::UnknownStage { .. })));

        let mut doc = SetupDocument::new(&stages());
        doc.water_type = "rain".to_string();
        let err = doc
            .engine_inputs(&Catalog::builtin(), &stages(), &FixedTime::new(0))
            .unwrap_err();
        assert!(matches!(err, SchemaError::Engine(CalcError::UnknownWaterType { .. })));
    }
}
