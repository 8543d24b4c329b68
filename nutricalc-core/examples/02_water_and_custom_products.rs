//! Mixed Water and Custom Products Example
//!
//! Blends tap and reverse osmosis water, merges a user-defined product into
//! the catalog and shows how the base water and the dose each move EC.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_water_and_custom_products
//! ```

use nutricalc_core::{
    fertilizer::{CustomFertilizer, FertilizerKind},
    time::FixedTime,
    water::WaterField,
    CalculationInput, Catalog, NutrientAggregator, NutrientKey, SelectedFertilizer, StageTable,
    WaterMixer, WaterSourceList, WaterType,
};

fn main() {
    println!("NutriCalc Water Mixing Example");
    println!("==============================\n");

    let clock = FixedTime::new(1_700_000_000_000);

    // Default list: tap at 100 L, reverse osmosis staged at 0 L
    let mut sources = WaterSourceList::default();
    let ro = sources
        .as_slice()
        .iter()
        .find(|source| source.volume == 0.0)
        .map(|source| source.id.clone())
        .unwrap_or_default();
    sources.update(&ro, WaterField::Volume, 300.0);
    let rain = sources.add_preset("rain", &clock);
    sources.update(&rain, WaterField::Volume, 50.0);

    for source in sources.as_slice() {
        println!(
            "  {:<20} {:>6.0} L  pH {:.2}  EC {:.2}",
            source.name, source.volume, source.ph, source.ec
        );
    }

    if let Some(mix) = WaterMixer::mix(sources.as_slice()) {
        println!(
            "  {:<20} {:>6.0} L  pH {:.2}  EC {:.2}  Ca {:.1}",
            "mixed",
            mix.total_volume,
            mix.ph,
            mix.ec,
            mix.ions.get(NutrientKey::Ca)
        );
    }
    println!();

    let custom = [CustomFertilizer::named("Seaweed Extract")
        .with_kind(FertilizerKind::Liquid)
        .with_entry("N", 1.0)
        .with_entry("K", 4.0)
        .with_entry("Fe", 0.05)];
    let catalog = Catalog::merge(&Catalog::builtin(), &custom, &clock);
    let seaweed = "custom_seaweed_extract_1700000000000";

    let stages = StageTable::default();
    let selection = vec![
        SelectedFertilizer::new("biobizz_bio_bloom", 4.0),
        SelectedFertilizer::new(seaweed, 2.0),
    ];

    let input = CalculationInput {
        water_volume: 10.0,
        stage: stages.get_or_first("mid_flower"),
        sources: sources.as_slice(),
        water_type: WaterType::Tap,
        custom_water: None,
        selection: &selection,
        catalog: &catalog,
    };

    let aggregator = NutrientAggregator::default();
    let unfed = aggregator.calculate(&CalculationInput {
        selection: &[],
        ..input
    });
    let fed = aggregator.calculate(&input);

    println!("EC from water alone: {:.2} mS/cm", unfed.ec.unwrap_or_default());
    println!("EC with nutrients:   {:.2} mS/cm", fed.ec.unwrap_or_default());
    println!("pH:                  {:.2}", fed.ph.unwrap_or_default());
    println!();

    for key in [NutrientKey::N, NutrientKey::K, NutrientKey::Ca, NutrientKey::Fe] {
        println!(
            "  {:<3} {:>8.2} ppm  (seaweed {:.2})",
            key,
            fed.nutrients.get(key),
            fed.contributions
                .get(seaweed)
                .map_or(0.0, |ppm| ppm.get(key))
        );
    }
}
