//! Stage assessment of a computed snapshot

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    calculator::NutrientSnapshot,
    nutrients::{NutrientGroup, NutrientKey},
    traits::Classifier,
};

use super::{gauge_percent, Band, CoarseStatus, GradedClassifier, Status};

/// Something that gets classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Measure {
    /// A nutrient concentration
    Nutrient(NutrientKey),
    /// Electrical conductivity
    Ec,
    /// pH
    Ph,
}

impl Measure {
    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nutrient(key) => key.label(),
            Self::Ec => "EC",
            Self::Ph => "pH",
        }
    }

    /// Scheme this measure is shown with
    pub const fn scheme(self) -> Scheme {
        match self {
            Self::Ec | Self::Ph => Scheme::Coarse,
            Self::Nutrient(key) => match key.group() {
                NutrientGroup::Primary => Scheme::Coarse,
                _ => Scheme::Graded,
            },
        }
    }
}

/// Classification scheme applied to a measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scheme {
    /// optimal / suboptimal
    Coarse,
    /// low / moderate / optimal / high
    Graded,
}

/// One classified value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    /// What was classified
    pub measure: Measure,
    /// Value from the snapshot
    pub value: f64,
    /// Stage band, if any
    pub band: Option<Band>,
    /// Scheme used for display
    pub scheme: Scheme,
    /// Graded result
    pub status: Status,
    /// Coarse result, derived from `status`
    pub coarse: CoarseStatus,
    /// Gauge fill level in percent
    pub gauge: f64,
}

impl Assessment {
    /// Status name under the display scheme
    pub fn label(&self) -> &'static str {
        match self.scheme {
            Scheme::Coarse => self.coarse.as_str(),
            Scheme::Graded => self.status.as_str(),
        }
    }

    /// True if inside the band
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }
}

/// Every snapshot value classified against the snapshot's stage
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageReport {
    /// Stage id
    pub stage_id: String,
    /// Nutrients in canonical order, then EC, then pH
    pub assessments: Vec<Assessment>,
}

impl StageReport {
    /// Classify `snapshot`. An empty snapshot gives an empty report.
    pub fn new(snapshot: &NutrientSnapshot, classifier: &GradedClassifier) -> Self {
        let stage = &snapshot.stage;

        let nutrients = NutrientKey::ALL.iter().filter_map(|&key| {
            snapshot
                .nutrients
                .value(key)
                .map(|value| (Measure::Nutrient(key), value, stage.band(key)))
        });
        let ec = snapshot.ec.map(|value| (Measure::Ec, value, Some(stage.ec)));
        let ph = snapshot.ph.map(|value| (Measure::Ph, value, Some(stage.ph)));

        let assessments = nutrients
            .chain(ec)
            .chain(ph)
            .map(|(measure, value, band)| {
                let status = classifier.classify(value, band);
                Assessment {
                    measure,
                    value,
                    band,
                    scheme: measure.scheme(),
                    status,
                    coarse: status.coarse(),
                    gauge: gauge_percent(value, band),
                }
            })
            .collect();

        Self {
            stage_id: stage.id.clone(),
            assessments,
        }
    }

    /// Assessment for `measure`
    pub fn get(&self, measure: Measure) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.measure == measure)
    }

    /// Assessments with a band that are not optimal
    pub fn off_target(&self) -> impl Iterator<Item = &Assessment> {
        self.assessments
            .iter()
            .filter(|a| a.status != Status::Optimal && a.status != Status::Unknown)
    }

    /// Number of optimal assessments
    pub fn optimal_count(&self) -> usize {
        self.assessments.iter().filter(|a| a.is_optimal()).count()
    }
}
