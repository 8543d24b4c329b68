//! Fertilizer Catalog, Selection and Contribution
//!
//! ## Overview
//!
//! - [`Catalog`]: read-only lookup of products. The built-in table is never
//!   modified; [`Catalog::merge`] combines it with user-defined products into
//!   a new catalog on every call.
//! - [`SelectedFertilizer`]: what the user doses, by catalog id.
//! - [`ContributionCalculator`]: turns doses into ppm per product.
//!
//! ## Ingestion Boundary
//!
//! Custom products arrive with arbitrary-cased composition keys ("N", "Fe",
//! "mg"). They are normalized to [`NutrientKey`](crate::NutrientKey) once,
//! inside the merge; keys outside the canonical set are dropped there and
//! never reach the calculation.
//!
//! ```rust
//! use nutricalc_core::fertilizer::{Catalog, CustomFertilizer};
//! use nutricalc_core::time::FixedTime;
//!
//! let base = Catalog::builtin();
//! let custom = [CustomFertilizer::named("Kelp Tea").with_entry("K", 4.0)];
//! let merged = Catalog::merge(&base, &custom, &FixedTime::new(1_700_000_000_000));
//!
//! assert!(merged.contains("custom_kelp_tea_1700000000000"));
//! assert_eq!(merged.len(), base.len() + 1);
//! ```

mod catalog;
mod contribution;
mod selection;

pub use catalog::{
    slugify, Catalog, Composition, CustomFertilizer, Fertilizer, FertilizerKind,
    DEFAULT_CUSTOM_DESCRIPTION, DEFAULT_CUSTOM_UNIT,
};
pub use contribution::{ContributionCalculator, Contributions};
pub use selection::{add_to_selection, prune_unresolved, remove_from_selection, SelectedFertilizer};
