//! Setup Document Validation
//!
//! Import never fails on content, so a separate pass decides whether an
//! imported setup is usable and what the user should look at. Issues are
//! sorted into errors (the setup cannot be computed as written), warnings
//! (it can, but something is silently ignored) and info.

use nutricalc_core::{CalcError, Catalog, NutrientKey, StageTable, WaterType};

use crate::setup::SetupDocument;

/// Validation report containing all issues found
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Validation errors (must be fixed)
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (should be reviewed)
    pub warnings: Vec<ValidationIssue>,

    /// Informational messages
    pub info: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an issue to the list matching its severity
    pub fn add(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Info => self.info.push(issue),
        }
    }

    /// Add one issue per engine diagnostic
    pub fn add_diagnostics(&mut self, diagnostics: &[CalcError]) {
        for error in diagnostics {
            self.add(from_calc_error(error));
        }
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// All issues, most severe first
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(&self.warnings).chain(&self.info)
    }
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Field that caused the issue (if applicable)
    pub field: Option<String>,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Water volume is zero or negative
    InvalidVolume,

    /// Growth stage id not in the stage table
    UnknownStage,

    /// Water type is not a preset or `custom`
    UnknownWaterType,

    /// Selected product not in the catalog
    UnresolvedFertilizer,

    /// Product selected more than once
    DuplicateSelection,

    /// Composition key outside the canonical nutrient set
    UnknownNutrient,

    /// Value could not be read as a number
    MalformedValue,

    /// Water sources carried no volume
    MixingUndefined,

    /// Custom product declares nothing
    EmptyComposition,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational only
    Info,

    /// Should be reviewed
    Warning,

    /// Must be fixed
    Error,
}

/// Check an imported setup against a catalog and stage table
///
/// `catalog` should be the catalog the setup will run against, i.e. already
/// merged with the document's custom products.
pub fn validate_setup(
    document: &SetupDocument,
    catalog: &Catalog,
    stages: &StageTable,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !document.water_volume.is_finite() || document.water_volume <= 0.0 {
        report.add(from_calc_error(&CalcError::InvalidVolume {
            volume: document.water_volume,
        }));
    }

    if !stages.contains(&document.growth_stage) {
        report.add(from_calc_error(&CalcError::UnknownStage {
            id: document.growth_stage.clone(),
        }));
    }

    if let Err(error) = document.water_type.parse::<WaterType>() {
        report.add(from_calc_error(&error));
    }

    for (index, entry) in document.selected_fertilizers.iter().enumerate() {
        if !catalog.contains(&entry.id) {
            report.add(from_calc_error(&CalcError::UnresolvedFertilizer {
                id: entry.id.clone(),
            }));
        }
        if document.selected_fertilizers[..index].iter().any(|e| e.id == entry.id) {
            report.add(ValidationIssue {
                issue_type: IssueType::DuplicateSelection,
                field: Some(format!("selectedFertilizers[{}]", index)),
                message: format!("'{}' is selected more than once; doses are summed", entry.id),
                severity: Severity::Warning,
            });
        }
    }

    for product in &document.custom_fertilizers {
        let label = product.id.as_deref().unwrap_or(&product.name);
        let mut declared = 0;

        for (key, value) in &product.composition {
            match key.parse::<NutrientKey>() {
                Ok(_) if *value > 0.0 => declared += 1,
                Ok(_) => {}
                Err(_) => report.add(ValidationIssue {
                    issue_type: IssueType::UnknownNutrient,
                    field: Some(format!("customFertilizers[{}].composition.{}", label, key)),
                    message: format!("'{}' is not a tracked nutrient and will be ignored", key),
                    severity: Severity::Warning,
                }),
            }
        }

        if declared == 0 {
            report.add(ValidationIssue {
                issue_type: IssueType::EmptyComposition,
                field: Some(format!("customFertilizers[{}]", label)),
                message: format!("'{}' declares no nutrients", product.name),
                severity: Severity::Info,
            });
        }
    }

    report
}

/// Convert an engine error into a validation issue
pub fn from_calc_error(error: &CalcError) -> ValidationIssue {
    match error {
        CalcError::InvalidVolume { .. } => ValidationIssue {
            issue_type: IssueType::InvalidVolume,
            field: Some("waterVolume".to_string()),
            message: error.to_string(),
            severity: Severity::Error,
        },
        CalcError::UnknownStage { .. } => ValidationIssue {
            issue_type: IssueType::UnknownStage,
            field: Some("growthStage".to_string()),
            message: error.to_string(),
            severity: Severity::Error,
        },
        CalcError::UnknownWaterType { .. } => ValidationIssue {
            issue_type: IssueType::UnknownWaterType,
            field: Some("waterType".to_string()),
            message: error.to_string(),
            severity: Severity::Error,
        },
        CalcError::UnresolvedFertilizer { id } => ValidationIssue {
            issue_type: IssueType::UnresolvedFertilizer,
            field: Some(format!("selectedFertilizers.{}", id)),
            message: error.to_string(),
            severity: Severity::Warning,
        },
        CalcError::MalformedComposition { key } => ValidationIssue {
            issue_type: IssueType::MalformedValue,
            field: Some(key.clone()),
            message: error.to_string(),
            severity: Severity::Warning,
        },
        CalcError::UnknownNutrient { key } => ValidationIssue {
            issue_type: IssueType::UnknownNutrient,
            field: Some(key.clone()),
            message: error.to_string(),
            severity: Severity::Warning,
        },
        CalcError::MixingUndefined => ValidationIssue {
            issue_type: IssueType::MixingUndefined,
            field: None,
            message: error.to_string(),
            severity: Severity::Info,
        },
    }
}
