//! Basic Nutrient Solution Example
//!
//! Doses two built-in products into ten liters of reverse osmosis water and
//! prints the resulting ppm, EC and pH with their stage classification.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_solution
//! ```

use nutricalc_core::{
    CalculationInput, Catalog, NutrientAggregator, SelectedFertilizer, StageTable, WaterType,
};

fn main() {
    println!("NutriCalc Basic Solution Example");
    println!("================================\n");

    let catalog = Catalog::builtin();
    let stages = StageTable::default();
    let stage = stages.get_or_first("late_veg");

    let selection = vec![
        SelectedFertilizer::new("biobizz_bio_grow", 4.0),
        SelectedFertilizer::new("biobizz_calmag", 1.0),
    ];

    let input = CalculationInput {
        water_volume: 10.0,
        stage,
        sources: &[],
        water_type: WaterType::Ro,
        custom_water: None,
        selection: &selection,
        catalog: &catalog,
    };

    let snapshot = NutrientAggregator::default().calculate(&input);

    println!("Stage: {}", snapshot.stage.name);
    for (id, ppm) in &snapshot.contributions {
        let dosed: Vec<String> = ppm
            .iter()
            .filter(|(_, value)| *value > 0.0)
            .map(|(key, value)| format!("{}={:.1}", key, value))
            .collect();
        println!("  {:<24} {}", id, dosed.join(" "));
    }
    println!();

    let report = snapshot.assess();
    println!("{:<16} {:>8}  {:<14} {}", "", "value", "band", "status");
    for assessment in &report.assessments {
        let band = assessment
            .band
            .map(|b| format!("{:.1}-{:.1}", b.min, b.max))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:>8.2}  {:<14} {}",
            assessment.measure.label(),
            assessment.value,
            band,
            assessment.label()
        );
    }

    println!(
        "\n{} of {} values in range",
        report.optimal_count(),
        report.assessments.len()
    );
    for error in &snapshot.diagnostics {
        println!("note: {}", error);
    }
}
