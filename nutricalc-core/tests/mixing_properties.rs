//! Property tests for water blending
//!
//! - Linear fields are the exact volume-weighted mean
//! - pH is mixed in hydrogen-ion space
//! - Equal pH stays equal regardless of volumes
//! - Staged (zero volume) sources carry no weight

mod common;

use approx::assert_relative_eq;
use proptest::prelude::*;

use common::source;
use nutricalc_core::{NutrientKey, WaterMixer, WaterSource};

fn source_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (3.0f64..10.0, 0.0f64..3.0, 0.0f64..200.0, 0.0f64..500.0)
}

fn build(params: &[(f64, f64, f64, f64)]) -> Vec<WaterSource> {
    params
        .iter()
        .enumerate()
        .map(|(i, &(ph, ec, ca, volume))| source(&format!("s{i}"), ph, ec, ca, volume))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn linear_fields_are_volume_weighted(params in prop::collection::vec(source_strategy(), 1..6)) {
        let sources = build(&params);
        let total: f64 = params.iter().map(|p| p.3).sum();

        match WaterMixer::mix(&sources) {
            None => prop_assert_eq!(total, 0.0),
            Some(mixed) => {
                let ec: f64 = params.iter().map(|p| p.1 * p.3).sum::<f64>() / total;
                let ca: f64 = params.iter().map(|p| p.2 * p.3).sum::<f64>() / total;
                let h: f64 = params.iter().map(|p| 10f64.powf(-p.0) * p.3).sum::<f64>() / total;

                prop_assert!((mixed.total_volume - total).abs() <= 1e-9 * total.max(1.0));
                prop_assert!((mixed.ec - ec).abs() <= 1e-9 * ec.max(1.0));
                prop_assert!((mixed.ions.get(NutrientKey::Ca) - ca).abs() <= 1e-9 * ca.max(1.0));
                prop_assert!((mixed.ph - (-h.log10())).abs() <= 1e-9);
            }
        }
    }

    #[test]
    fn identical_ph_survives_any_volumes(
        ph in 3.0f64..10.0,
        volumes in prop::collection::vec(0.1f64..1000.0, 1..6),
    ) {
        let sources: Vec<WaterSource> = volumes
            .iter()
            .enumerate()
            .map(|(i, &v)| source(&format!("s{i}"), ph, 0.1, 0.0, v))
            .collect();

        let mixed = WaterMixer::mix(&sources).unwrap();
        prop_assert!((mixed.ph - ph).abs() < 1e-9);
    }

    #[test]
    fn staged_sources_do_not_move_the_mix(
        active in source_strategy().prop_filter("needs volume", |p| p.3 > 0.0),
        staged in prop::collection::vec(source_strategy(), 0..4),
    ) {
        let alone = WaterMixer::mix(&build(&[active])).unwrap();

        let mut params = vec![active];
        params.extend(staged.into_iter().map(|(ph, ec, ca, _)| (ph, ec, ca, 0.0)));
        let with_staged = WaterMixer::mix(&build(&params)).unwrap();

        prop_assert_eq!(alone, with_staged);
    }
}

#[test]
fn mixed_ph_leans_acidic() {
    let sources = vec![source("acid", 4.0, 0.0, 0.0, 1.0), source("base", 8.0, 0.0, 0.0, 1.0)];
    let mixed = WaterMixer::mix(&sources).unwrap();

    assert_relative_eq!(mixed.ph, -((1e-4 + 1e-8) / 2.0f64).log10(), epsilon = 1e-12);
    assert!(mixed.ph < 4.31);
}
