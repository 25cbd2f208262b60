//! The feature vector consumed by the classifier.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisoryError, AdvisoryResult};

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 7;

/// Feature names in classifier order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "nitrogen",
    "phosphorus",
    "potassium",
    "temperature_c",
    "humidity_pct",
    "ph",
    "rainfall_mm",
];

/// One submission's soil and environmental readings, in the fixed order the
/// classifier expects: N, P, K, temperature, humidity, pH, rainfall.
///
/// `new` validates each reading against its declared input domain (the
/// form's slider ranges); form-boundary code goes through `new`. Fields
/// stay public for literal construction of known-good values (region
/// seeds, deserialized fixtures), which bypasses validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Soil nitrogen content, 0..=150.
    pub nitrogen: f64,
    /// Soil phosphorus content, 0..=150.
    pub phosphorus: f64,
    /// Soil potassium content, 0..=150.
    pub potassium: f64,
    /// Air temperature in °C, 0..=50.
    pub temperature_c: f64,
    /// Relative humidity in %, 0..=100.
    pub humidity_pct: f64,
    /// Soil pH, 3..=10.
    pub ph: f64,
    /// Rainfall in mm, 0..=300.
    pub rainfall_mm: f64,
}

impl FeatureVector {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        temperature_c: f64,
        humidity_pct: f64,
        ph: f64,
        rainfall_mm: f64,
    ) -> AdvisoryResult<Self> {
        check_domain("nitrogen", nitrogen, 0.0, 150.0)?;
        check_domain("phosphorus", phosphorus, 0.0, 150.0)?;
        check_domain("potassium", potassium, 0.0, 150.0)?;
        check_domain("temperature_c", temperature_c, 0.0, 50.0)?;
        check_domain("humidity_pct", humidity_pct, 0.0, 100.0)?;
        check_domain("ph", ph, 3.0, 10.0)?;
        check_domain("rainfall_mm", rainfall_mm, 0.0, 300.0)?;

        Ok(Self {
            nitrogen,
            phosphorus,
            potassium,
            temperature_c,
            humidity_pct,
            ph,
            rainfall_mm,
        })
    }

    /// The readings in fixed classifier order.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature_c,
            self.humidity_pct,
            self.ph,
            self.rainfall_mm,
        ]
    }
}

fn check_domain(name: &str, value: f64, min: f64, max: f64) -> AdvisoryResult<()> {
    if !value.is_finite() {
        return Err(AdvisoryError::invalid_input(format!(
            "{name} must be a finite number"
        )));
    }
    if value < min || value > max {
        return Err(AdvisoryError::invalid_input(format!(
            "{name} must be within [{min}, {max}], got {value}"
        )));
    }
    Ok(())
}
