//! Error Types for Nutrient Calculation
//!
//! ## Two kinds of failure
//!
//! The engine distinguishes between the ingestion boundary and the
//! calculation path:
//!
//! ### Ingestion boundary
//! Parsing caller-supplied identifiers into canonical types can fail and
//! returns `Err`:
//! - `UnknownNutrient`: composition key outside the canonical nutrient set
//! - `UnknownStage`: growth stage id missing from the stage table
//! - `UnknownWaterType`: water type id that is neither a preset nor `custom`
//!
//! ### Calculation path
//! The calculation itself never returns `Err`. Degenerate input degrades to a
//! defined output and the reason is recorded in
//! [`NutrientSnapshot::diagnostics`](crate::NutrientSnapshot):
//! - `InvalidVolume`: water volume of zero or less, output is empty
//! - `UnresolvedFertilizer`: selection id absent from the catalog, skipped
//! - `MixingUndefined`: water sources carry no volume, caller fell back
//!
//! ```rust
//! use nutricalc_core::{CalcError, NutrientKey};
//!
//! match "Fe".parse::<NutrientKey>() {
//!     Ok(key) => assert_eq!(key, NutrientKey::Fe),
//!     Err(CalcError::UnknownNutrient { .. }) => unreachable!(),
//!     Err(_) => unreachable!(),
//! }
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for engine operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Engine errors and recorded degradations
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CalcError {
    /// Water volume was zero, negative or not a number
    #[error("Invalid water volume {volume}: must be greater than zero")]
    InvalidVolume {
        /// The rejected volume in liters
        volume: f64,
    },

    /// A selected fertilizer id has no entry in the catalog
    #[error("Fertilizer '{id}' is not in the catalog")]
    UnresolvedFertilizer {
        /// The selection id that failed to resolve
        id: String,
    },

    /// Composition value could not be read as a number
    #[error("Composition value for '{key}' is not a number")]
    MalformedComposition {
        /// Composition key carrying the bad value
        key: String,
    },

    /// All water sources have zero volume
    #[error("Water sources carry no volume, no mix available")]
    MixingUndefined,

    /// Key is not part of the canonical nutrient set
    #[error("Unknown nutrient key '{key}'")]
    UnknownNutrient {
        /// The key as supplied by the caller
        key: String,
    },

    /// Growth stage id not present in the stage table
    #[error("Unknown growth stage '{id}'")]
    UnknownStage {
        /// The requested stage id
        id: String,
    },

    /// Water type id is neither a preset nor `custom`
    #[error("Unknown water type '{id}'")]
    UnknownWaterType {
        /// The requested water type id
        id: String,
    },
}

impl CalcError {
    /// True for degradations the engine recovers from on its own
    pub fn is_degradation(&self) -> bool {
        matches!(
            self,
            Self::InvalidVolume { .. }
                | Self::UnresolvedFertilizer { .. }
                | Self::MalformedComposition { .. }
                | Self::MixingUndefined
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn degradations_are_flagged() {
        assert!(CalcError::MixingUndefined.is_degradation());
        assert!(CalcError::InvalidVolume { volume: 0.0 }.is_degradation());
        assert!(!CalcError::UnknownStage { id: "x".to_string() }.is_degradation());
    }

    #[test]
    fn messages_name_the_culprit() {
        let err = CalcError::UnresolvedFertilizer { id: "custom_gone_1".to_string() };
        assert_eq!(err.to_string(), "Fertilizer 'custom_gone_1' is not in the catalog");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_with_kind_tag() {
        use serde_json::json;

        let err = CalcError::UnresolvedFertilizer { id: "custom_gone_1".to_string() };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value, json!({ "kind": "unresolved_fertilizer", "id": "custom_gone_1" }));
        assert_eq!(serde_json::from_value::<CalcError>(value).unwrap(), err);

        assert_eq!(
            serde_json::to_value(&CalcError::MixingUndefined).unwrap(),
            json!({ "kind": "mixing_undefined" })
        );
        assert_eq!(
            serde_json::from_value::<CalcError>(json!({ "kind": "invalid_volume", "volume": -2.5 }))
                .unwrap(),
            CalcError::InvalidVolume { volume: -2.5 }
        );
    }
}
