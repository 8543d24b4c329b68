//! Setup Documents for NutriCalc
//!
//! ## Overview
//!
//! A setup (water volume, growth stage, water type, dosed products, custom
//! water analysis and custom products) is saved and shared as a JSON
//! document. This crate reads and writes that document and turns it into
//! engine inputs. It owns no storage: callers hand it strings and get
//! strings back.
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "timestamp": "2024-03-01T12:00:00Z",
//!   "data": {
//!     "waterVolume": 10,
//!     "growthStage": "early_veg",
//!     "waterType": "ro",
//!     "selectedFertilizers": [{ "id": "biobizz_bio_grow", "amount": 2, "active": true }],
//!     "customWaterProfile": { "ca": 0, "mg": 0, "s": 0, "na": 0, "baseEC": 0, "ph": 0 },
//!     "customFertilizers": []
//!   }
//! }
//! ```
//!
//! The envelope is optional; a bare `data` object is accepted too.
//!
//! ## Tolerant Import
//!
//! Documents are hand-edited and come from older versions of the app, so
//! import never rejects a document for a bad field. Numbers are read the way
//! a browser's `Number()` reads them (see [`coerce`]), missing fields get
//! defaults, and anything that had to be coerced is recorded. Whether the
//! result is usable is a separate question answered by
//! [`validation::validate_setup`].
//!
//! ## Usage Example
//!
//! ```rust
//! use nutricalc_core::{Catalog, NutrientAggregator, StageTable, WaterSourceList};
//! use nutricalc_core::time::FixedTime;
//! use nutricalc_schemas::SetupDocument;
//!
//! let json = r#"{"waterVolume": "20", "growthStage": "late_veg",
//!                "selectedFertilizers": [{"id": "biobizz_bio_grow", "amount": 4, "active": true}]}"#;
//!
//! let stages = StageTable::default();
//! let imported = SetupDocument::parse(json, &stages)?;
//! assert_eq!(imported.document.water_volume, 20.0);
//!
//! let inputs = imported
//!     .document
//!     .engine_inputs(&Catalog::builtin(), &stages, &FixedTime::new(0))?;
//! let sources = WaterSourceList::new([]);
//! let snapshot = NutrientAggregator::default().calculate(&inputs.input(sources.as_slice()));
//! assert!(snapshot.ec.is_some());
//! # Ok::<(), nutricalc_schemas::SchemaError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use nutricalc_core::CalcError;

pub mod coerce;
pub mod setup;
pub mod validation;

pub use setup::{EngineInputs, ImportedSetup, SetupDocument, EXPORT_VERSION};
pub use validation::{validate_setup, IssueType, Severity, ValidationIssue, ValidationReport};

/// Result type for document operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Document errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Text is not JSON
    #[error("Failed to parse document: {0}")]
    ParseError(#[from] serde_json::Error),

    /// JSON is valid but not an object
    #[error("Document is not a JSON object")]
    NotAnObject,

    /// Timestamp outside the representable range
    #[error("Timestamp {0} ms cannot be represented")]
    InvalidTimestamp(u64),

    /// The document names something the engine does not know
    #[error("Engine rejected document: {0}")]
    Engine(#[from] CalcError),
}
