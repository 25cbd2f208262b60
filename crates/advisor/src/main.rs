//! Demo binary: wire the advisory context and run one sample submission.
//!
//! Uses the trained model artifact from `KRISHIGURU_MODEL` when set
//! (degrading to a disabled recommendation on load failure), otherwise the
//! rule-table fallback.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use krishiguru_advisor::{Advisor, RecommendationSummary, Submission};
use krishiguru_catalog::CropCatalog;
use krishiguru_classifier::ClassifierHandle;
use krishiguru_core::{Farm, Region};
use krishiguru_economics::CostModel;

fn main() -> Result<()> {
    krishiguru_observability::init();

    let catalog = CropCatalog::builtin();
    info!(crops = catalog.len(), "reference catalog loaded");

    let classifier = match std::env::var_os("KRISHIGURU_MODEL") {
        Some(path) => ClassifierHandle::from_model_path(&PathBuf::from(path)),
        None => ClassifierHandle::rule_based(),
    };
    let advisor = Advisor::new(classifier, catalog);

    if !advisor.recommendation_enabled() {
        warn!("recommendation action disabled; set KRISHIGURU_MODEL to a valid artifact");
        return Ok(());
    }

    let region = Region::East;
    let farm = Farm::new(2.0, region)?;
    let submission = Submission::new(region.default_features(), farm, CostModel::FiveComponent);

    let recommendation = advisor.recommend(&submission)?;
    let summary = RecommendationSummary::from_recommendation(&recommendation);

    info!(
        crop = %summary.crop_name,
        investment = %summary.total_investment,
        revenue = %summary.expected_revenue,
        profit = %summary.net_profit,
        roi = %summary.roi,
        "sample recommendation"
    );
    info!("{}", summary.description);

    Ok(())
}
