//! `krishiguru-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the feature vector fed to the classifier, the canonical crop identifier,
//! farm/region value types, and the advisory error taxonomy.

pub mod error;
pub mod farm;
pub mod feature;
pub mod id;

pub use error::{AdvisoryError, AdvisoryResult};
pub use farm::{Farm, Region};
pub use feature::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use id::{CropId, SubmissionId};
