//! Pure aggregation over a ledger snapshot. Nothing here mutates.

use crate::ledger::Ledger;
use crate::models::{MacroBreakdown, NutrientTotals, SeriesPoint};
use crate::storage::LedgerStore;

/// Sum of nutrient/cost fields across one day's entries.
/// All zero if the day has no bucket.
pub fn daily_total<S: LedgerStore>(ledger: &Ledger<S>, date: &str) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for entry in ledger.day(date) {
        totals.accumulate(entry);
    }
    totals
}

/// Sum across every day in the ledger.
///
/// Equals the sum of `daily_total` over `ledger.dates()` by construction
/// (the additivity the history view relies on).
pub fn grand_total<S: LedgerStore>(ledger: &Ledger<S>) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for date in ledger.dates() {
        for entry in ledger.day(date) {
            totals.accumulate(entry);
        }
    }
    totals
}

/// Per-day calorie points, ascending by date, one point per day present.
/// Days with no entries simply do not appear; no gap filling.
pub fn time_series<S: LedgerStore>(ledger: &Ledger<S>) -> Vec<SeriesPoint> {
    ledger
        .dates()
        .into_iter()
        .map(|date| SeriesPoint {
            date: date.to_string(),
            calories: ledger.day(date).iter().map(|e| e.calories).sum(),
        })
        .collect()
}

/// The protein/fat/carbs triple of any totals shape, for proportional
/// display. `MacroBreakdown::proportions` covers the all-zero case.
pub fn macro_breakdown(totals: &NutrientTotals) -> MacroBreakdown {
    MacroBreakdown {
        protein: totals.protein,
        fat: totals.fat,
        carbs: totals.carbs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FoodCatalog;
    use crate::models::FoodDefinition;
    use crate::storage::MemoryStore;

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_foods(vec![
            FoodDefinition {
                name: "rice".to_string(),
                unit: "100g".to_string(),
                protein: 2.5,
                fat: 0.3,
                carbs: 37.0,
                calories: 168.0,
                price: None,
            },
            FoodDefinition {
                name: "egg".to_string(),
                unit: "piece".to_string(),
                protein: 6.2,
                fat: 5.0,
                carbs: 0.2,
                calories: 76.0,
                price: Some(0.3),
            },
        ])
        .unwrap()
    }

    fn populated_ledger() -> Ledger<MemoryStore> {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        let cat = catalog();
        ledger.add_entry("2024-01-01", &cat, "rice", 2.0).unwrap();
        ledger.add_entry("2024-01-01", &cat, "egg", 1.0).unwrap();
        ledger.add_entry("2024-01-03", &cat, "egg", 2.0).unwrap();
        ledger
    }

    #[test]
    fn test_daily_total_absent_date_is_zero() {
        let ledger = populated_ledger();
        assert_eq!(daily_total(&ledger, "2024-01-02"), NutrientTotals::default());
    }

    #[test]
    fn test_daily_total_sums_entries() {
        let ledger = populated_ledger();
        let day = daily_total(&ledger, "2024-01-01");
        assert!((day.calories - 412.0).abs() < 1e-9);
        assert!((day.protein - 11.2).abs() < 1e-9);
        assert!((day.cost - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_grand_total_is_sum_of_daily_totals() {
        let ledger = populated_ledger();
        let grand = grand_total(&ledger);

        let mut summed = NutrientTotals::default();
        for date in ledger.dates() {
            let day = daily_total(&ledger, date);
            summed.protein += day.protein;
            summed.fat += day.fat;
            summed.carbs += day.carbs;
            summed.calories += day.calories;
            summed.cost += day.cost;
        }
        assert_eq!(grand, summed);
    }

    #[test]
    fn test_time_series_ascending_no_gap_filling() {
        let ledger = populated_ledger();
        let series = time_series(&ledger);

        assert_eq!(series.len(), 2); // 2024-01-02 has no point
        assert_eq!(series[0].date, "2024-01-01");
        assert_eq!(series[0].calories, 412.0);
        assert_eq!(series[1].date, "2024-01-03");
        assert_eq!(series[1].calories, 152.0);
    }

    #[test]
    fn test_macro_breakdown_drops_calories_and_cost() {
        let ledger = populated_ledger();
        let macros = macro_breakdown(&daily_total(&ledger, "2024-01-01"));
        assert!((macros.protein - 11.2).abs() < 1e-9);
        assert!((macros.fat - 5.6).abs() < 1e-9);
        assert!((macros.carbs - 74.2).abs() < 1e-9);
        assert!(macros.proportions().is_some());
    }

    #[test]
    fn test_empty_ledger_aggregates() {
        let ledger: Ledger<MemoryStore> = Ledger::open(MemoryStore::new()).unwrap();
        assert_eq!(grand_total(&ledger), NutrientTotals::default());
        assert!(time_series(&ledger).is_empty());
        assert!(macro_breakdown(&grand_total(&ledger)).proportions().is_none());
    }
}
