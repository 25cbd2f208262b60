//! Display-side formatting.
//!
//! The only place currency and percentage rounding happens. Everything
//! upstream stays unrounded so the five cost components never accumulate
//! rounding error.

use serde::Serialize;

use crate::Recommendation;

/// Whole rupees with thousands separators: `45000.0` → `"₹45,000"`.
///
/// Matches the original rendering (truncation toward zero, not rounding).
pub fn format_rupees(amount: f64) -> String {
    let truncated = amount.trunc() as i64;
    let negative = truncated < 0;
    let digits = truncated.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Two-decimal percentage: `122.2222…` → `"122.22%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// One slice of the cost-breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdownRow {
    pub label: &'static str,
    pub amount: f64,
}

/// Pre-formatted rendering of one recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub crop_name: String,
    pub description: String,
    pub total_investment: String,
    pub expected_revenue: String,
    pub net_profit: String,
    pub roi: String,
    /// Base cost plus applied surcharges, zero-amount rows skipped.
    pub cost_breakdown: Vec<CostBreakdownRow>,
}

impl RecommendationSummary {
    pub fn from_recommendation(rec: &Recommendation) -> Self {
        let e = &rec.economics;

        let all_rows = [
            CostBreakdownRow { label: "Base Cost", amount: e.base_cost },
            CostBreakdownRow { label: "Labor", amount: e.labor_cost },
            CostBreakdownRow { label: "Fertilizers", amount: e.fertilizer_cost },
            CostBreakdownRow { label: "Irrigation", amount: e.irrigation_cost },
            CostBreakdownRow { label: "Misc", amount: e.misc_cost },
        ];
        let cost_breakdown = all_rows
            .into_iter()
            .filter(|row| row.amount > 0.0)
            .collect();

        Self {
            crop_name: rec.crop.display_name(),
            description: rec.description.clone(),
            total_investment: format_rupees(e.total_cost),
            expected_revenue: format_rupees(e.revenue),
            net_profit: format_rupees(e.profit),
            roi: format_percent(e.roi_percent),
            cost_breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishiguru_core::{CropId, Farm, FeatureVector, Region, SubmissionId};
    use krishiguru_economics::CostModel;

    #[test]
    fn rupee_formatting_groups_thousands() {
        assert_eq!(format_rupees(0.0), "₹0");
        assert_eq!(format_rupees(999.0), "₹999");
        assert_eq!(format_rupees(45000.0), "₹45,000");
        assert_eq!(format_rupees(100000.0), "₹100,000");
        assert_eq!(format_rupees(1234567.0), "₹1,234,567");
    }

    #[test]
    fn rupee_formatting_truncates_and_signs() {
        assert_eq!(format_rupees(1234.99), "₹1,234");
        assert_eq!(format_rupees(-55000.5), "-₹55,000");
    }

    #[test]
    fn percent_formatting_rounds_to_two_decimals() {
        assert_eq!(format_percent(122.22222), "122.22%");
        assert_eq!(format_percent(-8.5), "-8.50%");
    }

    #[test]
    fn summary_skips_zero_surcharge_rows() {
        let advisor = crate::Advisor::rule_based();
        let submission = crate::Submission::new(
            FeatureVector::new(120.0, 10.0, 10.0, 32.0, 80.0, 6.5, 80.0).unwrap(),
            Farm::new(2.0, Region::East).unwrap(),
            CostModel::LaborOnly,
        );
        let rec = advisor.recommend(&submission).unwrap();
        let summary = RecommendationSummary::from_recommendation(&rec);

        assert_eq!(summary.crop_name, "Rice");
        let labels: Vec<&str> = summary.cost_breakdown.iter().map(|r| r.label).collect();
        assert_eq!(labels, ["Base Cost", "Labor"]);
        assert_eq!(summary.total_investment, "₹36,000");
    }

    #[test]
    fn summary_renders_reference_scenario() {
        let advisor = crate::Advisor::rule_based();
        let submission = crate::Submission::new(
            FeatureVector::new(120.0, 10.0, 10.0, 32.0, 80.0, 6.5, 80.0).unwrap(),
            Farm::new(2.0, Region::East).unwrap(),
            CostModel::FiveComponent,
        );
        let rec = advisor.recommend(&submission).unwrap();
        let summary = RecommendationSummary::from_recommendation(&rec);

        assert_eq!(summary.total_investment, "₹45,000");
        assert_eq!(summary.expected_revenue, "₹100,000");
        assert_eq!(summary.net_profit, "₹55,000");
        assert_eq!(summary.roi, "122.22%");
        assert_eq!(summary.cost_breakdown.len(), 5);
    }

    #[test]
    fn summary_serializes_for_presentation() {
        let rec = Recommendation {
            submission_id: SubmissionId::new(),
            crop: CropId::new("rice"),
            description: "desc".to_string(),
            economics: krishiguru_economics::compute(
                &krishiguru_catalog::CropReference::new("rice", 15000.0, 20.0, 2500.0, "desc"),
                2.0,
                CostModel::FiveComponent,
            )
            .unwrap(),
            generated_at: chrono::Utc::now(),
        };
        let summary = RecommendationSummary::from_recommendation(&rec);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["roi"], "122.22%");
    }
}
