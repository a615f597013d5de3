use dialoguer::{Confirm, Input};
use strsim::jaro_winkler;

use crate::catalog::FoodCatalog;
use crate::error::{LedgerError, Result};

/// Prompt for a quantity when one was not given on the command line.
pub fn prompt_quantity(food_name: &str, unit: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Quantity of {} (in {})", food_name, unit))
        .interact_text()?;

    input
        .parse()
        .map_err(|_| LedgerError::InvalidQuantity(f64::NAN))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Fuzzy suggestions for a food name that did not resolve exactly.
///
/// The core lookup stays exact and case-sensitive; this only helps the
/// user fix their spelling. Returns up to five candidates scoring > 0.7.
pub fn suggest_foods<'a>(catalog: &'a FoodCatalog, input: &str) -> Vec<&'a str> {
    let needle = input.to_lowercase();

    let mut candidates: Vec<(&str, f64)> = catalog
        .names()
        .into_iter()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().take(5).map(|(name, _)| name).collect()
}
