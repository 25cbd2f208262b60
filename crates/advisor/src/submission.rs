//! One form submission.

use serde::{Deserialize, Serialize};

use krishiguru_core::{Farm, FeatureVector};
use krishiguru_economics::CostModel;

/// Everything one button press carries into the pipeline.
///
/// `FeatureVector` and `Farm` validate at construction, so a `Submission`
/// that exists already satisfies the input preconditions. The cost model
/// is named explicitly per submission; there is no default policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub features: FeatureVector,
    pub farm: Farm,
    pub cost_model: CostModel,
}

impl Submission {
    pub fn new(features: FeatureVector, farm: Farm, cost_model: CostModel) -> Self {
        Self {
            features,
            farm,
            cost_model,
        }
    }
}
