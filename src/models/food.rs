use serde::{Deserialize, Serialize};

/// A catalog row: per-unit nutritional and cost rates for one food.
///
/// `quantity` in the ledger is a dimensionless multiplier against these
/// rates; `unit` is only a display label for one unit of quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDefinition {
    pub name: String,

    pub unit: String,

    pub protein: f64,

    pub fat: f64,

    pub carbs: f64,

    pub calories: f64,

    /// Cost per unit. Absent in older catalogs; treated as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl FoodDefinition {
    /// Price per unit with the absent-price default applied.
    #[inline]
    pub fn price_per_unit(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Basic validation: all required rates present and non-negative.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && self.protein >= 0.0
            && self.fat >= 0.0
            && self.carbs >= 0.0
            && self.calories >= 0.0
            && self.price.map_or(true, |p| p >= 0.0)
    }
}
