//! The crop reference catalog.

use std::collections::HashMap;

use krishiguru_core::{AdvisoryError, AdvisoryResult, CropId};

use crate::reference::CropReference;

/// Build-once, read-only map from canonical crop identifier to its
/// reference row.
///
/// Lookup of an identifier absent from the catalog fails with
/// `UnknownCrop`; there is deliberately no zero-filled fallback row.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    entries: HashMap<CropId, CropReference>,
}

impl CropCatalog {
    pub fn from_rows(rows: impl IntoIterator<Item = CropReference>) -> Self {
        let entries = rows.into_iter().map(|row| (row.crop.clone(), row)).collect();
        Self { entries }
    }

    /// The built-in reference table.
    pub fn builtin() -> Self {
        let rows = [
            // (crop, cost/acre, quintals/acre, price/quintal, description)
            ("rice", 15000.0, 20.0, 2500.0, "Staple food crop grown in waterlogged conditions."),
            ("maize", 12000.0, 18.0, 2000.0, "Versatile grain used as food and fodder."),
            ("chickpea", 11000.0, 14.0, 4800.0, "Protein-rich legume suited for dry areas."),
            ("kidneybeans", 13000.0, 16.0, 5000.0, "Used in curries, needs moderate rainfall."),
            ("pigeonpeas", 12500.0, 15.0, 4900.0, "Drought-resistant pulse."),
            ("mothbeans", 10500.0, 13.0, 4700.0, "Resilient pulse for dry, sandy soil."),
            ("mungbean", 10000.0, 12.0, 4600.0, "Nitrogen-fixing legume."),
            ("blackgram", 11500.0, 14.0, 4500.0, "Used in South Indian dishes."),
            ("lentil", 10000.0, 12.0, 4400.0, "High-protein pulse for cooler climates."),
            ("pomegranate", 14000.0, 11.0, 5200.0, "Fruit with high export demand."),
            ("banana", 16000.0, 24.0, 3000.0, "Grows year-round in tropical zones."),
            ("mango", 15500.0, 22.0, 4000.0, "King of fruits, needs hot summers."),
            ("grapes", 17000.0, 18.0, 3500.0, "Dry climate fruit for juice/wine."),
            ("watermelon", 13000.0, 20.0, 3800.0, "Hot weather fruit, needs lots of water."),
            ("muskmelon", 14000.0, 21.0, 3900.0, "Juicy melon grown in summer."),
            ("apple", 18000.0, 25.0, 5500.0, "Temperate fruit needing cold winters."),
            ("orange", 16000.0, 23.0, 4200.0, "Semi-tropical citrus fruit."),
            ("papaya", 15000.0, 22.0, 3100.0, "Fast-growing fruit crop."),
            ("coconut", 17000.0, 26.0, 5200.0, "Coastal crop used for oil/water."),
            ("cotton", 14500.0, 17.0, 2800.0, "Cash crop for textile industry."),
            ("jute", 13500.0, 16.0, 2700.0, "Fiber crop for sacks and mats."),
            ("coffee", 19000.0, 10.0, 6000.0, "Hill-grown beverage crop."),
            // Crops emitted by the rule-based fallback classifier.
            ("wheat", 11000.0, 18.0, 2200.0, "Rabi cereal for temperate plains."),
            ("groundnut", 12000.0, 14.0, 5500.0, "Oilseed legume for acidic soils."),
            ("sugarcane", 20000.0, 350.0, 350.0, "Long-duration cash crop, potassium-hungry."),
            ("pulses", 10500.0, 12.0, 4600.0, "Mixed pulse cropping on phosphorus-rich soil."),
            ("barley", 9500.0, 15.0, 1800.0, "Hardy cereal tolerant of poor conditions."),
        ];

        Self::from_rows(rows.into_iter().map(|(crop, cost, yld, price, desc)| {
            CropReference::new(crop, cost, yld, price, desc)
        }))
    }

    /// Look up one crop's reference row.
    pub fn lookup(&self, crop: &CropId) -> AdvisoryResult<&CropReference> {
        self.entries
            .get(crop)
            .ok_or_else(|| AdvisoryError::unknown_crop(crop.as_str()))
    }

    /// All crop identifiers, sorted. Feeds the supported-crop roster.
    pub fn crops(&self) -> Vec<&CropId> {
        let mut crops: Vec<&CropId> = self.entries.keys().collect();
        crops.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        crops
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
