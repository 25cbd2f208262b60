//! The economics engine.

use serde::{Deserialize, Serialize};

use krishiguru_catalog::CropReference;
use krishiguru_core::{AdvisoryError, AdvisoryResult};

/// Surcharge rates as fractions of base cost.
pub const LABOR_RATE: f64 = 0.20;
pub const FERTILIZER_RATE: f64 = 0.15;
pub const IRRIGATION_RATE: f64 = 0.10;
pub const MISC_RATE: f64 = 0.05;

/// Which cost surcharges compose `total_cost`.
///
/// The two policies come from mutually inconsistent upstream variants.
/// Neither is authoritative, so there is no `Default`: every caller names
/// its policy explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// Labor 20% + fertilizer 15% + irrigation 10% + misc 5% of base
    /// (total cost = 1.5 × base).
    FiveComponent,
    /// Labor 20% of base only (total cost = 1.2 × base).
    LaborOnly,
}

/// One submission's financial estimate, unrounded.
///
/// Surcharge components the chosen cost model does not apply are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicsResult {
    pub base_cost: f64,
    pub labor_cost: f64,
    pub fertilizer_cost: f64,
    pub irrigation_cost: f64,
    pub misc_cost: f64,
    pub total_cost: f64,
    /// Quintals across the whole farm.
    pub total_yield: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roi_percent: f64,
}

/// Compute the financial estimate for one crop on `acres` of land.
///
/// Preconditions: `acres` finite and strictly positive, `cost_per_acre`
/// non-negative. A zero total cost (zero `cost_per_acre`) makes ROI
/// undefined and is signaled as `DivisionUndefined`, never as an
/// infinity or NaN.
pub fn compute(
    reference: &CropReference,
    acres: f64,
    cost_model: CostModel,
) -> AdvisoryResult<EconomicsResult> {
    if !acres.is_finite() || acres <= 0.0 {
        return Err(AdvisoryError::invalid_input(format!(
            "acres must be a positive number, got {acres}"
        )));
    }
    if !(reference.cost_per_acre.is_finite() && reference.cost_per_acre >= 0.0) {
        return Err(AdvisoryError::invalid_input(format!(
            "cost_per_acre must be non-negative, got {}",
            reference.cost_per_acre
        )));
    }

    let base_cost = reference.cost_per_acre * acres;
    let labor_cost = base_cost * LABOR_RATE;
    let (fertilizer_cost, irrigation_cost, misc_cost) = match cost_model {
        CostModel::FiveComponent => (
            base_cost * FERTILIZER_RATE,
            base_cost * IRRIGATION_RATE,
            base_cost * MISC_RATE,
        ),
        CostModel::LaborOnly => (0.0, 0.0, 0.0),
    };
    let total_cost = base_cost + labor_cost + fertilizer_cost + irrigation_cost + misc_cost;

    let total_yield = reference.yield_per_acre * acres;
    let revenue = total_yield * reference.market_price_per_quintal;
    let profit = revenue - total_cost;

    if total_cost == 0.0 {
        return Err(AdvisoryError::DivisionUndefined);
    }
    let roi_percent = profit / total_cost * 100.0;

    Ok(EconomicsResult {
        base_cost,
        labor_cost,
        fertilizer_cost,
        irrigation_cost,
        misc_cost,
        total_cost,
        total_yield,
        revenue,
        profit,
        roi_percent,
    })
}
