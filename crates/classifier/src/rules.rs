//! Rule-based fallback classifier.

use krishiguru_core::{CropId, FeatureVector};

use crate::CropClassifier;

/// Fixed threshold rule table, evaluated top to bottom, first match wins.
///
/// The ordering is a priority chain: an input that satisfies several rules
/// gets the highest-priority crop, so reordering the arms changes behavior.
/// Comparison strictness (`>` vs `>=`) is part of the contract for each arm.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl CropClassifier for RuleClassifier {
    fn predict(&self, f: &FeatureVector) -> CropId {
        let crop = if f.temperature_c > 30.0 && f.humidity_pct > 70.0 && f.rainfall_mm > 75.0 {
            "rice"
        } else if (20.0..=30.0).contains(&f.temperature_c)
            && (50.0..=70.0).contains(&f.humidity_pct)
        {
            "wheat"
        } else if f.temperature_c > 25.0 && f.rainfall_mm < 40.0 {
            "cotton"
        } else if f.ph < 6.0 {
            "groundnut"
        } else if f.potassium > 100.0 {
            "sugarcane"
        } else if f.nitrogen > 100.0 {
            "maize"
        } else if f.phosphorus > 100.0 {
            "pulses"
        } else {
            "barley"
        };
        CropId::new(crop)
    }

    fn name(&self) -> &'static str {
        "rule-fallback"
    }
}
