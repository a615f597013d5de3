pub mod prompts;
pub mod render;

pub use prompts::{prompt_quantity, prompt_yes_no, suggest_foods};
pub use render::{
    display_calorie_chart, display_catalog, display_day, display_macro_breakdown, display_totals,
};
