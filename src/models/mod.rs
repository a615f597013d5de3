mod entry;
mod food;

pub use entry::{Entry, MacroBreakdown, NutrientTotals, SeriesPoint};
pub use food::FoodDefinition;
