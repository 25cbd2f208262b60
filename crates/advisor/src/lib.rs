//! `krishiguru-advisor` — the per-submission advisory pipeline.
//!
//! One synchronous call per form submission: validate → classify → look up
//! reference data → compute economics. The [`Advisor`] is the explicit
//! immutable context built once at startup (classifier handle + crop
//! catalog) and passed by reference; there are no ambient globals.

pub mod display;
pub mod submission;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use krishiguru_catalog::CropCatalog;
use krishiguru_classifier::ClassifierHandle;
use krishiguru_core::{AdvisoryResult, CropId, SubmissionId};
use krishiguru_economics::EconomicsResult;

pub use display::{format_percent, format_rupees, CostBreakdownRow, RecommendationSummary};
pub use submission::Submission;

/// The outcome of one accepted submission.
///
/// `submission_id` and `generated_at` are log-correlation metadata; the
/// crop and economics fields are fully determined by the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub submission_id: SubmissionId,
    pub crop: CropId,
    pub description: String,
    pub economics: EconomicsResult,
    pub generated_at: DateTime<Utc>,
}

/// Immutable advisory context: classifier + reference catalog.
#[derive(Debug)]
pub struct Advisor {
    classifier: ClassifierHandle,
    catalog: CropCatalog,
}

impl Advisor {
    pub fn new(classifier: ClassifierHandle, catalog: CropCatalog) -> Self {
        Self { classifier, catalog }
    }

    /// Rule-fallback advisor over the built-in catalog.
    pub fn rule_based() -> Self {
        Self::new(ClassifierHandle::rule_based(), CropCatalog::builtin())
    }

    /// Whether the recommendation action should be offered at all.
    ///
    /// False when the trained model failed to load; the presentation layer
    /// disables the submit action instead of letting every submission fail.
    pub fn recommendation_enabled(&self) -> bool {
        self.classifier.is_available()
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Run the full pipeline for one submission.
    ///
    /// Errors are the structured advisory taxonomy; no partial results.
    pub fn recommend(&self, submission: &Submission) -> AdvisoryResult<Recommendation> {
        let submission_id = SubmissionId::new();
        let span = info_span!("recommend", %submission_id);
        let _guard = span.enter();

        let crop = self.classifier.predict(&submission.features)?;
        let reference = self.catalog.lookup(&crop)?;
        let economics = krishiguru_economics::compute(
            reference,
            submission.farm.acres(),
            submission.cost_model,
        )?;

        info!(
            crop = %crop,
            acres = submission.farm.acres(),
            region = %submission.farm.region(),
            total_cost = economics.total_cost,
            profit = economics.profit,
            "recommendation computed"
        );

        Ok(Recommendation {
            submission_id,
            crop,
            description: reference.description.clone(),
            economics,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishiguru_catalog::CropReference;
    use krishiguru_core::{AdvisoryError, Farm, FeatureVector, Region};
    use krishiguru_economics::CostModel;
    use proptest::prelude::*;
    use std::path::Path;

    fn rice_weather() -> FeatureVector {
        FeatureVector::new(120.0, 10.0, 10.0, 32.0, 80.0, 6.5, 80.0).unwrap()
    }

    fn submission(acres: f64, cost_model: CostModel) -> Submission {
        Submission::new(
            rice_weather(),
            Farm::new(acres, Region::East).unwrap(),
            cost_model,
        )
    }

    #[test]
    fn end_to_end_rice_scenario() {
        let advisor = Advisor::rule_based();
        let rec = advisor
            .recommend(&submission(2.0, CostModel::FiveComponent))
            .unwrap();

        assert_eq!(rec.crop, CropId::new("rice"));
        assert_eq!(
            rec.description,
            "Staple food crop grown in waterlogged conditions."
        );
        assert_eq!(rec.economics.base_cost, 30000.0);
        assert_eq!(rec.economics.total_cost, 45000.0);
        assert_eq!(rec.economics.total_yield, 40.0);
        assert_eq!(rec.economics.revenue, 100000.0);
        assert_eq!(rec.economics.profit, 55000.0);
        assert!((rec.economics.roi_percent - 122.222).abs() < 0.001);
    }

    #[test]
    fn cost_model_is_caller_chosen() {
        let advisor = Advisor::rule_based();
        let five = advisor
            .recommend(&submission(2.0, CostModel::FiveComponent))
            .unwrap();
        let labor = advisor
            .recommend(&submission(2.0, CostModel::LaborOnly))
            .unwrap();

        assert_eq!(five.economics.total_cost, 45000.0);
        assert_eq!(labor.economics.total_cost, 36000.0);
    }

    #[test]
    fn recommend_is_deterministic_modulo_metadata() {
        let advisor = Advisor::rule_based();
        let s = submission(3.0, CostModel::FiveComponent);
        let a = advisor.recommend(&s).unwrap();
        let b = advisor.recommend(&s).unwrap();

        assert_eq!(a.crop, b.crop);
        assert_eq!(a.economics, b.economics);
        assert_eq!(a.description, b.description);
    }

    #[test]
    fn unknown_crop_surfaces_as_error() {
        // A classifier emitting a label outside the catalog must surface
        // UnknownCrop, never a zero-filled result.
        struct Durian;
        impl krishiguru_classifier::CropClassifier for Durian {
            fn predict(&self, _features: &FeatureVector) -> CropId {
                CropId::new("durian")
            }
            fn name(&self) -> &'static str {
                "durian-only"
            }
        }

        let advisor = Advisor::new(ClassifierHandle::ready(Durian), CropCatalog::builtin());
        let err = advisor
            .recommend(&submission(1.0, CostModel::FiveComponent))
            .unwrap_err();
        assert_eq!(err, AdvisoryError::unknown_crop("durian"));
    }

    #[test]
    fn every_rule_fallback_crop_has_a_catalog_row() {
        // The rule classifier's whole output space joins the catalog, so a
        // rule-based advisor can never hit UnknownCrop.
        let catalog = CropCatalog::builtin();
        for crop in [
            "rice",
            "wheat",
            "cotton",
            "groundnut",
            "sugarcane",
            "maize",
            "pulses",
            "barley",
        ] {
            assert!(catalog.lookup(&CropId::new(crop)).is_ok(), "{crop} missing");
        }
    }

    #[test]
    fn degraded_model_disables_recommendation() {
        let advisor = Advisor::new(
            ClassifierHandle::from_model_path(Path::new("/nonexistent/model.json")),
            CropCatalog::builtin(),
        );

        assert!(!advisor.recommendation_enabled());
        let err = advisor
            .recommend(&submission(1.0, CostModel::FiveComponent))
            .unwrap_err();
        assert!(matches!(err, AdvisoryError::ModelUnavailable(_)));
    }

    #[test]
    fn zero_acres_never_reaches_division_undefined() {
        // The Farm constructor is the upstream guard: a zero land size is
        // InvalidInput before any economics run.
        let err = Farm::new(0.0, Region::Central).unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidInput(_)));
    }

    proptest! {
        /// Property: the rule-based pipeline is total and deterministic over
        /// the whole input domain: any in-domain submission yields a
        /// recommendation, replaying it yields the same crop and economics,
        /// and the predicted crop always has a catalog row.
        #[test]
        fn recommend_is_total_and_deterministic_over_the_input_domain(
            n in 0.0f64..=150.0,
            p in 0.0f64..=150.0,
            k in 0.0f64..=150.0,
            temp in 0.0f64..=50.0,
            humidity in 0.0f64..=100.0,
            ph in 3.0f64..=10.0,
            rainfall in 0.0f64..=300.0,
            acres in 0.1f64..=1000.0,
            five_component in proptest::bool::ANY,
        ) {
            let advisor = Advisor::rule_based();
            let cost_model = if five_component {
                CostModel::FiveComponent
            } else {
                CostModel::LaborOnly
            };
            let s = Submission::new(
                FeatureVector::new(n, p, k, temp, humidity, ph, rainfall).unwrap(),
                Farm::new(acres, Region::Central).unwrap(),
                cost_model,
            );

            let a = advisor.recommend(&s).unwrap();
            let b = advisor.recommend(&s).unwrap();

            prop_assert!(advisor.catalog().lookup(&a.crop).is_ok());
            prop_assert_eq!(a.crop.clone(), b.crop);
            prop_assert_eq!(a.economics, b.economics);
            prop_assert_eq!(a.description, b.description);
        }
    }

    #[test]
    fn division_undefined_remains_distinct_from_zero_profit() {
        // A free crop (zero cost) makes ROI undefined.
        let free = CropReference::new("freecrop", 0.0, 10.0, 100.0, "free to grow");
        let err = krishiguru_economics::compute(&free, 1.0, CostModel::FiveComponent).unwrap_err();
        assert_eq!(err, AdvisoryError::DivisionUndefined);

        // Zero profit with positive cost is a legitimate result.
        let break_even = CropReference::new("breakeven", 100.0, 1.5, 100.0, "breaks even");
        let result =
            krishiguru_economics::compute(&break_even, 1.0, CostModel::FiveComponent).unwrap();
        assert_eq!(result.profit, 0.0);
        assert_eq!(result.roi_percent, 0.0);
    }
}
