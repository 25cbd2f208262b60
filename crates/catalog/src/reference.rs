//! One crop's reference row.

use serde::{Deserialize, Serialize};

use krishiguru_core::CropId;

/// Immutable reference data for one crop.
///
/// Currency amounts are rupees, yields are quintals. Values stay unrounded
/// here; display rounding happens at the presentation boundary only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropReference {
    pub crop: CropId,
    /// Cultivation cost per acre, before surcharges.
    pub cost_per_acre: f64,
    /// Expected yield in quintals per acre.
    pub yield_per_acre: f64,
    /// Market price per quintal of yield.
    pub market_price_per_quintal: f64,
    pub description: String,
}

impl CropReference {
    pub fn new(
        crop: &str,
        cost_per_acre: f64,
        yield_per_acre: f64,
        market_price_per_quintal: f64,
        description: &str,
    ) -> Self {
        Self {
            crop: CropId::new(crop),
            cost_per_acre,
            yield_per_acre,
            market_price_per_quintal,
            description: description.to_string(),
        }
    }
}
