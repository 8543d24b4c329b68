//! Coarse two-way classification

use crate::traits::Classifier;

use super::{Band, CoarseStatus, GradedClassifier};

/// Optimal / suboptimal classifier, derived from the graded scheme
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoarseClassifier {
    graded: GradedClassifier,
}

impl CoarseClassifier {
    /// Coarse view over a specific graded classifier
    pub fn from_graded(graded: GradedClassifier) -> Self {
        Self { graded }
    }
}

impl Classifier for CoarseClassifier {
    type Status = CoarseStatus;

    fn classify(&self, value: f64, band: Option<Band>) -> CoarseStatus {
        self.graded.classify(value, band).coarse()
    }
}
