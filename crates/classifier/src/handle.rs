//! Degradable handle around a classifier implementation.

use std::path::Path;

use tracing::{info, warn};

use krishiguru_core::{AdvisoryError, AdvisoryResult, CropId, FeatureVector};

use crate::model::CentroidClassifier;
use crate::rules::RuleClassifier;
use crate::CropClassifier;

/// A classifier that may have failed to load.
///
/// A missing or corrupt model artifact must disable the recommendation
/// action, not crash the process: construction never fails, and a handle
/// built from a bad artifact answers every `predict` with
/// `ModelUnavailable` carrying the load-time cause.
pub enum ClassifierHandle {
    Ready(Box<dyn CropClassifier>),
    Unavailable(String),
}

impl ClassifierHandle {
    pub fn ready(classifier: impl CropClassifier + 'static) -> Self {
        Self::Ready(Box::new(classifier))
    }

    /// The rule-table fallback; always available.
    pub fn rule_based() -> Self {
        Self::ready(RuleClassifier::new())
    }

    /// Load the trained model, degrading on failure.
    pub fn from_model_path(path: &Path) -> Self {
        match CentroidClassifier::load(path) {
            Ok(model) => {
                info!(
                    path = %path.display(),
                    classes = model.class_count(),
                    "loaded crop model artifact"
                );
                Self::ready(model)
            }
            Err(AdvisoryError::ModelUnavailable(reason)) => {
                warn!(%reason, "crop model unavailable; recommendation disabled");
                Self::Unavailable(reason)
            }
            Err(other) => {
                // Load only emits ModelUnavailable, but stay total.
                let reason = other.to_string();
                warn!(%reason, "crop model unavailable; recommendation disabled");
                Self::Unavailable(reason)
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Name of the active implementation, if any.
    pub fn classifier_name(&self) -> Option<&'static str> {
        match self {
            Self::Ready(classifier) => Some(classifier.name()),
            Self::Unavailable(_) => None,
        }
    }

    pub fn predict(&self, features: &FeatureVector) -> AdvisoryResult<CropId> {
        match self {
            Self::Ready(classifier) => Ok(classifier.predict(features)),
            Self::Unavailable(reason) => Err(AdvisoryError::model_unavailable(reason.clone())),
        }
    }
}

impl core::fmt::Debug for ClassifierHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ready(classifier) => f
                .debug_tuple("ClassifierHandle::Ready")
                .field(&classifier.name())
                .finish(),
            Self::Unavailable(reason) => f
                .debug_tuple("ClassifierHandle::Unavailable")
                .field(reason)
                .finish(),
        }
    }
}
