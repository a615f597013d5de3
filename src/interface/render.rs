use crate::models::{Entry, MacroBreakdown, NutrientTotals, SeriesPoint};

const CHART_WIDTH: usize = 40;

/// Display one day's entries with a per-day total line.
pub fn display_day(date: &str, entries: &[Entry], totals: &NutrientTotals) {
    if entries.is_empty() {
        println!("{}: no entries", date);
        return;
    }

    println!();
    println!("=== {} ===", date);
    println!();

    let max_name_len = entries
        .iter()
        .map(|e| e.food_name.len())
        .max()
        .unwrap_or(10);

    for entry in entries {
        println!(
            "  [{:>3}] {:<width$} {:>6.1} {:<6} P:{:>6.1} F:{:>6.1} C:{:>6.1} {:>7.1} kcal  {:>6.2}",
            entry.id,
            entry.food_name,
            entry.quantity,
            entry.unit,
            entry.protein,
            entry.fat,
            entry.carbs,
            entry.calories,
            entry.cost,
            width = max_name_len
        );
    }

    println!();
    display_totals("Day total", totals);
}

/// Display a totals line (used for daily and grand totals).
pub fn display_totals(label: &str, totals: &NutrientTotals) {
    println!(
        "{}: P:{:.1}g F:{:.1}g C:{:.1}g {:.1} kcal, cost {:.2}",
        label, totals.protein, totals.fat, totals.carbs, totals.calories, totals.cost
    );
}

/// Display the macro triple as labelled percentage bars.
///
/// A zero-sum breakdown has no defined proportions; print a placeholder
/// instead of dividing by zero.
pub fn display_macro_breakdown(macros: &MacroBreakdown) {
    println!();
    println!("--- Macro breakdown ---");

    let Some((protein, fat, carbs)) = macros.proportions() else {
        println!("(no macro data)");
        return;
    };

    for (label, fraction) in [("Protein", protein), ("Fat", fat), ("Carbs", carbs)] {
        let filled = (fraction * CHART_WIDTH as f64).round() as usize;
        println!(
            "  {:<7} {:>5.1}% {}",
            label,
            fraction * 100.0,
            "#".repeat(filled.min(CHART_WIDTH))
        );
    }
}

/// Display the per-day calorie series as a horizontal bar chart.
pub fn display_calorie_chart(series: &[SeriesPoint]) {
    if series.is_empty() {
        println!("No history to chart.");
        return;
    }

    println!();
    println!("=== Calories per day ===");
    println!();

    let max_calories = series
        .iter()
        .map(|p| p.calories)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    for point in series {
        let filled = (point.calories / max_calories * CHART_WIDTH as f64).round() as usize;
        println!(
            "  {} {:>7.1} {}",
            point.date,
            point.calories,
            "#".repeat(filled.min(CHART_WIDTH))
        );
    }

    println!();
}

/// Display the catalog as a simple list.
pub fn display_catalog(foods: &[crate::models::FoodDefinition]) {
    if foods.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Catalog ({} foods) ===", foods.len());
    println!();

    for food in foods {
        println!(
            "  {} (per {}) - P:{} F:{} C:{} {} kcal, price {:.2}",
            food.name,
            food.unit,
            food.protein,
            food.fat,
            food.carbs,
            food.calories,
            food.price_per_unit()
        );
    }

    println!();
}
