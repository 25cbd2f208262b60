//! Farm and region value types.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::feature::FeatureVector;

/// Broad growing region.
///
/// The region only seeds default form values; it is never part of the
/// feature vector the classifier sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    /// Default readings to pre-fill the form with.
    ///
    /// `Central` carries the baseline defaults; the other regions shade
    /// temperature, humidity and rainfall while staying in-domain.
    pub fn default_features(&self) -> FeatureVector {
        let (temperature_c, humidity_pct, rainfall_mm) = match self {
            Region::North => (22.0, 50.0, 90.0),
            Region::South => (30.0, 70.0, 120.0),
            Region::East => (27.0, 75.0, 160.0),
            Region::West => (28.0, 45.0, 60.0),
            Region::Central => (25.0, 55.0, 100.0),
        };

        // Baseline defaults are in-domain by construction.
        FeatureVector {
            nitrogen: 50.0,
            phosphorus: 50.0,
            potassium: 50.0,
            temperature_c,
            humidity_pct,
            ph: 7.0,
            rainfall_mm,
        }
    }
}

impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        };
        f.write_str(name)
    }
}

/// One farm, ephemeral per submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    acres: f64,
    region: Region,
}

impl Farm {
    /// Create a farm. `acres` must be finite and strictly positive; this is
    /// the upstream guard that keeps a zero land size from ever reaching the
    /// economics engine.
    pub fn new(acres: f64, region: Region) -> AdvisoryResult<Self> {
        if !acres.is_finite() || acres <= 0.0 {
            return Err(AdvisoryError::invalid_input(format!(
                "acres must be a positive number, got {acres}"
            )));
        }
        Ok(Self { acres, region })
    }

    pub fn acres(&self) -> f64 {
        self.acres
    }

    pub fn region(&self) -> Region {
        self.region
    }
}
