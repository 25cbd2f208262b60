//! `krishiguru-classifier` — the classifier adapter boundary.
//!
//! One trait, two interchangeable implementations selected at construction
//! time: a trained model loaded from a serialized artifact, and a fixed
//! rule-table fallback. The adapter emits crop identifiers only; it must
//! not mutate any state and must stay deterministic.

pub mod handle;
pub mod model;
pub mod rules;

use krishiguru_core::{CropId, FeatureVector};

pub use handle::ClassifierHandle;
pub use model::{CentroidClassifier, ClassCentroid, ModelArtifact, MODEL_FORMAT_VERSION};
pub use rules::RuleClassifier;

/// Maps one feature vector to a crop identifier.
///
/// Implementations hold only immutable state and take `&self`, so a shared
/// classifier may serve concurrent submissions without locking.
pub trait CropClassifier: Send + Sync {
    /// Deterministic, side-effect-free inference.
    fn predict(&self, features: &FeatureVector) -> CropId;

    /// Short implementation name for logs.
    fn name(&self) -> &'static str;
}
