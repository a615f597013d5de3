use serde::{Deserialize, Serialize};

use crate::models::FoodDefinition;

/// One logged consumption event.
///
/// The nutrient and cost fields are a cache: `quantity` times the per-unit
/// rates of the catalog definition that matched `food_name` at the last
/// add or edit. They do not track later catalog changes on their own; an
/// edit recomputes them against the current catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Ledger-unique id, assigned at creation, never reassigned.
    pub id: u64,

    /// Calendar day (`YYYY-MM-DD`) the entry belongs to. Never changed by edit.
    pub date: String,

    /// Catalog key resolved at creation; may later dangle if the catalog changes.
    #[serde(rename = "name")]
    pub food_name: String,

    pub quantity: f64,

    /// Unit label snapshotted from the catalog at creation.
    /// Edits keep it even if the catalog's unit has since changed.
    pub unit: String,

    pub protein: f64,

    pub fat: f64,

    pub carbs: f64,

    pub calories: f64,

    #[serde(default)]
    pub cost: f64,
}

impl Entry {
    /// Build an entry with derived fields computed from a catalog definition.
    pub fn from_definition(id: u64, date: &str, def: &FoodDefinition, quantity: f64) -> Self {
        Self {
            id,
            date: date.to_string(),
            food_name: def.name.clone(),
            quantity,
            unit: def.unit.clone(),
            protein: def.protein * quantity,
            fat: def.fat * quantity,
            carbs: def.carbs * quantity,
            calories: def.calories * quantity,
            cost: def.price_per_unit() * quantity,
        }
    }

    /// Recompute the derived cache from a (current) catalog definition.
    ///
    /// Leaves `id`, `date`, `food_name`, and the snapshotted `unit` alone.
    pub fn recompute(&mut self, def: &FoodDefinition, quantity: f64) {
        self.quantity = quantity;
        self.protein = def.protein * quantity;
        self.fat = def.fat * quantity;
        self.carbs = def.carbs * quantity;
        self.calories = def.calories * quantity;
        self.cost = def.price_per_unit() * quantity;
    }
}

/// Summed nutrient and cost values for a day or the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientTotals {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub calories: f64,
    pub cost: f64,
}

impl NutrientTotals {
    /// Add one entry's derived values into the running total.
    pub fn accumulate(&mut self, entry: &Entry) {
        self.protein += entry.protein;
        self.fat += entry.fat;
        self.carbs += entry.carbs;
        self.calories += entry.calories;
        self.cost += entry.cost;
    }
}

/// One point of the per-day calorie series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: String,
    pub calories: f64,
}

/// The protein/fat/carbs triple used for proportional (pie-style) display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroBreakdown {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroBreakdown {
    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }

    /// Fractions of the macro sum, in protein/fat/carbs order.
    ///
    /// Returns `None` when all three are zero so callers never divide by zero.
    pub fn proportions(&self) -> Option<(f64, f64, f64)> {
        let sum = self.sum();
        if sum == 0.0 {
            return None;
        }
        Some((self.protein / sum, self.fat / sum, self.carbs / sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> FoodDefinition {
        FoodDefinition {
            name: "rice".to_string(),
            unit: "100g".to_string(),
            protein: 2.5,
            fat: 0.3,
            carbs: 37.0,
            calories: 168.0,
            price: None,
        }
    }

    #[test]
    fn test_from_definition_derives_fields() {
        let entry = Entry::from_definition(1, "2024-01-01", &rice(), 2.0);
        assert_eq!(entry.protein, 5.0);
        assert_eq!(entry.fat, 0.6);
        assert_eq!(entry.carbs, 74.0);
        assert_eq!(entry.calories, 336.0);
        assert_eq!(entry.cost, 0.0); // absent price => 0
        assert_eq!(entry.unit, "100g");
    }

    #[test]
    fn test_recompute_keeps_identity_and_unit() {
        let mut entry = Entry::from_definition(7, "2024-01-01", &rice(), 1.0);

        let mut changed = rice();
        changed.unit = "150g".to_string();
        changed.protein = 5.0;
        entry.recompute(&changed, 3.0);

        assert_eq!(entry.id, 7);
        assert_eq!(entry.date, "2024-01-01");
        assert_eq!(entry.unit, "100g"); // snapshot survives the edit
        assert_eq!(entry.quantity, 3.0);
        assert_eq!(entry.protein, 15.0);
    }

    #[test]
    fn test_totals_accumulate() {
        let mut totals = NutrientTotals::default();
        totals.accumulate(&Entry::from_definition(1, "2024-01-01", &rice(), 2.0));
        totals.accumulate(&Entry::from_definition(2, "2024-01-01", &rice(), 1.0));
        assert_eq!(totals.calories, 504.0);
        assert_eq!(totals.protein, 7.5);
    }

    #[test]
    fn test_macro_proportions_zero_sum() {
        let zero = MacroBreakdown::default();
        assert!(zero.proportions().is_none());

        let some = MacroBreakdown {
            protein: 1.0,
            fat: 1.0,
            carbs: 2.0,
        };
        let (p, f, c) = some.proportions().unwrap();
        assert_eq!(p, 0.25);
        assert_eq!(f, 0.25);
        assert_eq!(c, 0.5);
    }
}
