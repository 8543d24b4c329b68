//! Setup documents through export, import, validation and the engine

use approx::assert_abs_diff_eq;
use nutricalc_core::{
    fertilizer::{CustomFertilizer, FertilizerKind},
    time::FixedTime,
    Catalog, CustomWaterProfile, NutrientAggregator, NutrientKey, SelectedFertilizer, StageTable,
    WaterSourceList,
};
use nutricalc_schemas::{validate_setup, IssueType, SetupDocument, EXPORT_VERSION};

fn kelp_setup(stages: &StageTable) -> SetupDocument {
    let mut doc = SetupDocument::new(stages);
    doc.growth_stage = "late_veg".to_string();
    doc.custom_fertilizers = vec![CustomFertilizer::named("Kelp Tea")
        .with_id("custom_kelp")
        .with_kind(FertilizerKind::Liquid)
        .with_entry("N", 5.0)];
    doc.selected_fertilizers = vec![SelectedFertilizer::new("custom_kelp", 2.0)];
    doc
}

#[test]
fn export_then_import_preserves_document() {
    let stages = StageTable::default();
    let mut doc = kelp_setup(&stages);
    doc.water_type = "custom".to_string();
    doc.custom_water_profile = CustomWaterProfile {
        ca: 40.0,
        mg: 12.0,
        base_ec: 0.3,
        ph: 7.1,
        ..CustomWaterProfile::default()
    };

    let json = doc.export_now(&FixedTime::new(1_709_294_400_000)).unwrap();
    let imported = SetupDocument::parse(&json, &stages).unwrap();

    assert_eq!(imported.version.as_deref(), Some(EXPORT_VERSION));
    assert_eq!(
        imported.exported_at.map(|ts| ts.timestamp_millis()),
        Some(1_709_294_400_000)
    );
    assert!(imported.diagnostics.is_empty());
    assert_eq!(imported.document, doc);
}

#[test]
fn custom_product_reaches_the_snapshot() {
    let stages = StageTable::default();
    let doc = kelp_setup(&stages);

    let inputs = doc
        .engine_inputs(&Catalog::builtin(), &stages, &FixedTime::new(0))
        .unwrap();
    assert!(inputs.catalog.contains("custom_kelp"));

    let report = validate_setup(&doc, &inputs.catalog, &stages);
    assert!(report.is_valid());
    assert_eq!(report.total_issues(), 0);

    let sources = WaterSourceList::new([]);
    let snapshot = NutrientAggregator::default().calculate(&inputs.input(sources.as_slice()));

    // 5 x 2 mL x 1 / 10 L over reverse osmosis water
    assert_abs_diff_eq!(snapshot.nutrients.get(NutrientKey::N), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(snapshot.ec.unwrap_or_default(), 0.06, epsilon = 0.011);
    assert_eq!(snapshot.stage.id, "late_veg");
    assert!(snapshot.diagnostics.is_empty());
}

#[test]
fn hand_edited_document_imports_and_reports() {
    let json = r#"{
        "waterVolume": "-4",
        "growthStage": "seedling",
        "waterType": "rain",
        "selectedFertilizers": [
            {"id": "biobizz_bio_grow", "amount": "3", "active": 1},
            {"amount": 5},
            {"id": "custom_lost_1", "amount": 1, "active": true}
        ],
        "customWaterProfile": {"ca": "lots", "baseEC": "0.4"},
        "customFertilizers": [
            {"name": "Mystery", "type": "powder", "composition": {"N": "x", "no3": 9}}
        ]
    }"#;

    let stages = StageTable::default();
    let imported = SetupDocument::parse(json, &stages).unwrap();
    let doc = &imported.document;

    assert_eq!(doc.water_volume, -4.0);
    assert_eq!(doc.selected_fertilizers.len(), 2);
    assert_eq!(doc.selected_fertilizers[0].amount, 3.0);
    assert!(doc.selected_fertilizers[0].active);
    assert_eq!(doc.custom_water_profile.ca, 0.0);
    assert_eq!(doc.custom_water_profile.base_ec, 0.4);
    assert_eq!(imported.diagnostics.len(), 2);

    assert!(doc
        .engine_inputs(&Catalog::builtin(), &stages, &FixedTime::new(0))
        .is_err());

    let catalog = Catalog::merge(&Catalog::builtin(), &doc.custom_fertilizers, &FixedTime::new(0));
    let report = validate_setup(doc, &catalog, &stages);

    let errors: Vec<IssueType> = report.errors.iter().map(|i| i.issue_type).collect();
    assert_eq!(
        errors,
        vec![IssueType::InvalidVolume, IssueType::UnknownStage, IssueType::UnknownWaterType]
    );
    assert!(report
        .warnings
        .iter()
        .any(|i| i.issue_type == IssueType::UnresolvedFertilizer));
    assert!(report
        .warnings
        .iter()
        .any(|i| i.issue_type == IssueType::UnknownNutrient));
    assert!(report.info.iter().any(|i| i.issue_type == IssueType::EmptyComposition));
}
