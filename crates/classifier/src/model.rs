//! Trained-model classifier loaded from a serialized artifact.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use krishiguru_core::{AdvisoryError, AdvisoryResult, CropId, FeatureVector, FEATURE_COUNT};

use crate::CropClassifier;

/// Artifact format version this build understands.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// On-disk model artifact: one centroid per crop class, in feature order
/// N, P, K, temperature, humidity, pH, rainfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub classes: Vec<ClassCentroid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCentroid {
    pub label: String,
    pub centroid: [f64; FEATURE_COUNT],
}

/// Nearest-centroid classifier over the artifact's classes.
///
/// Inference picks the class whose centroid minimizes squared Euclidean
/// distance to the feature vector; ties go to the earlier class, so
/// prediction stays deterministic for identical inputs.
#[derive(Debug, Clone)]
pub struct CentroidClassifier {
    classes: Vec<(CropId, [f64; FEATURE_COUNT])>,
}

impl CentroidClassifier {
    /// Load and validate an artifact from disk.
    ///
    /// Any failure (missing file, malformed JSON, bad version, empty or
    /// non-finite classes) is `ModelUnavailable`; callers degrade rather
    /// than crash.
    pub fn load(path: &Path) -> AdvisoryResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            AdvisoryError::model_unavailable(format!("{}: {e}", path.display()))
        })?;
        let artifact: ModelArtifact = serde_json::from_slice(&bytes).map_err(|e| {
            AdvisoryError::model_unavailable(format!("{}: {e}", path.display()))
        })?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> AdvisoryResult<Self> {
        if artifact.format_version != MODEL_FORMAT_VERSION {
            return Err(AdvisoryError::model_unavailable(format!(
                "unsupported artifact format version {} (expected {})",
                artifact.format_version, MODEL_FORMAT_VERSION
            )));
        }
        if artifact.classes.is_empty() {
            return Err(AdvisoryError::model_unavailable(
                "artifact contains no classes",
            ));
        }
        for class in &artifact.classes {
            if class.label.trim().is_empty() {
                return Err(AdvisoryError::model_unavailable("empty class label"));
            }
            if class.centroid.iter().any(|v| !v.is_finite()) {
                return Err(AdvisoryError::model_unavailable(format!(
                    "non-finite centroid for class '{}'",
                    class.label
                )));
            }
        }

        let classes = artifact
            .classes
            .into_iter()
            .map(|c| (CropId::new(&c.label), c.centroid))
            .collect();
        Ok(Self { classes })
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

impl CropClassifier for CentroidClassifier {
    fn predict(&self, features: &FeatureVector) -> CropId {
        let point = features.as_array();

        // `from_artifact` guarantees at least one class.
        let mut best = &self.classes[0];
        let mut best_dist = squared_distance(&point, &best.1);
        for class in &self.classes[1..] {
            let dist = squared_distance(&point, &class.1);
            if dist < best_dist {
                best = class;
                best_dist = dist;
            }
        }
        best.0.clone()
    }

    fn name(&self) -> &'static str {
        "nearest-centroid"
    }
}

fn squared_distance(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
