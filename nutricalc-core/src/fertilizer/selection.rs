//! The user's dosing selection

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    constants::dosing::{DEFAULT_LIQUID_DOSE_ML, DEFAULT_POWDER_DOSE_G},
    traits::NonNegative,
};

use super::{Catalog, FertilizerKind};

/// A product in the current mix
///
/// Inactive or zero-amount entries stay in the selection and contribute
/// nothing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedFertilizer {
    /// Catalog id
    pub id: String,
    /// Dose in the product's unit (mL or g)
    pub amount: f64,
    /// Whether the dose counts
    pub active: bool,
}

impl SelectedFertilizer {
    /// Active selection of `amount`
    pub fn new(id: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            amount: amount.non_negative(),
            active: true,
        }
    }

    /// Set the dose; NaN, infinities and negatives become 0
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount.non_negative();
    }

    /// Flip the active flag
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// True if this entry contributes to the solution
    pub fn is_dosed(&self) -> bool {
        self.active && self.amount.non_negative() > 0.0
    }
}

/// Add `id` with the starting dose for its form
///
/// Returns false, leaving the selection unchanged, if `id` is already
/// selected or does not resolve in `catalog`.
pub fn add_to_selection(
    selection: &mut Vec<SelectedFertilizer>,
    id: &str,
    catalog: &Catalog,
) -> bool {
    if id.is_empty() || selection.iter().any(|entry| entry.id == id) {
        return false;
    }
    let Some(fertilizer) = catalog.get(id) else {
        return false;
    };

    let amount = match fertilizer.kind {
        FertilizerKind::Powder => DEFAULT_POWDER_DOSE_G,
        FertilizerKind::Liquid => DEFAULT_LIQUID_DOSE_ML,
    };
    selection.push(SelectedFertilizer::new(id, amount));
    true
}

/// Remove every entry for `id`. Returns true if any was removed.
pub fn remove_from_selection(selection: &mut Vec<SelectedFertilizer>, id: &str) -> bool {
    let before = selection.len();
    selection.retain(|entry| entry.id != id);
    selection.len() != before
}

/// Drop selections whose id no longer resolves in `catalog`
///
/// Returns the removed ids in selection order.
pub fn prune_unresolved(selection: &mut Vec<SelectedFertilizer>, catalog: &Catalog) -> Vec<String> {
    let mut removed = Vec::new();
    selection.retain(|entry| {
        let keep = catalog.contains(&entry.id);
        if !keep {
            removed.push(entry.id.clone());
        }
        keep
    });
    removed
}
