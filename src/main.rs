use clap::Parser;
use std::path::Path;

use food_ledger_rs::cli::{Cli, Command};
use food_ledger_rs::error::Result;
use food_ledger_rs::interface::{
    display_calorie_chart, display_catalog, display_day, display_macro_breakdown, display_totals,
    prompt_quantity, prompt_yes_no, suggest_foods,
};
use food_ledger_rs::ledger::{Ledger, today};
use food_ledger_rs::report;
use food_ledger_rs::storage::JsonFileStore;
use food_ledger_rs::FoodCatalog;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Add {
            food,
            quantity,
            date,
        } => cmd_add(&cli.catalog, &cli.ledger, &food, quantity, date),
        Command::Edit { date, id, quantity } => cmd_edit(&cli.catalog, &cli.ledger, &date, id, quantity),
        Command::Delete { date, id, yes } => cmd_delete(&cli.ledger, &date, id, yes),
        Command::Today => cmd_today(&cli.ledger),
        Command::History => cmd_history(&cli.ledger),
        Command::Chart => cmd_chart(&cli.ledger),
        Command::Foods => cmd_foods(&cli.catalog),
    }
}

fn load_catalog(path: &str) -> Result<Option<FoodCatalog>> {
    if !Path::new(path).exists() {
        eprintln!("Catalog file not found: {}", path);
        eprintln!("Provide one with --catalog (JSON array or CSV of food definitions).");
        return Ok(None);
    }
    FoodCatalog::load(path).map(Some)
}

fn open_ledger(path: &str) -> Result<Ledger<JsonFileStore>> {
    Ledger::open(JsonFileStore::new(path))
}

/// Log a food for today (or the given date).
fn cmd_add(
    catalog_path: &str,
    ledger_path: &str,
    food: &str,
    quantity: Option<f64>,
    date: Option<String>,
) -> Result<()> {
    let Some(catalog) = load_catalog(catalog_path)? else {
        return Ok(());
    };

    let Some(def) = catalog.find(food) else {
        println!("Food not found in catalog: {}", food);
        let suggestions = suggest_foods(&catalog, food);
        if !suggestions.is_empty() {
            println!("Did you mean: {}?", suggestions.join(", "));
        }
        return Ok(());
    };

    let quantity = match quantity {
        Some(q) => q,
        None => prompt_quantity(&def.name, &def.unit)?,
    };

    let date = date.unwrap_or_else(today);
    let mut ledger = open_ledger(ledger_path)?;
    let entry = ledger.add_entry(&date, &catalog, food, quantity)?;

    println!(
        "Logged {} {} {} on {} ({:.1} kcal).",
        entry.quantity, entry.unit, entry.food_name, entry.date, entry.calories
    );

    let totals = report::daily_total(&ledger, &date);
    display_totals("Day total", &totals);
    Ok(())
}

/// Change the quantity of a logged entry, recomputing its values from
/// the current catalog.
fn cmd_edit(
    catalog_path: &str,
    ledger_path: &str,
    date: &str,
    id: u64,
    quantity: f64,
) -> Result<()> {
    let Some(catalog) = load_catalog(catalog_path)? else {
        return Ok(());
    };

    let mut ledger = open_ledger(ledger_path)?;
    let entry = ledger.edit_entry(date, id, &catalog, quantity)?;

    println!(
        "Updated {} on {} to {} {} ({:.1} kcal).",
        entry.food_name, entry.date, entry.quantity, entry.unit, entry.calories
    );

    let totals = report::daily_total(&ledger, date);
    display_totals("Day total", &totals);
    Ok(())
}

/// Delete a logged entry, confirming first unless --yes was given.
fn cmd_delete(ledger_path: &str, date: &str, id: u64, yes: bool) -> Result<()> {
    let mut ledger = open_ledger(ledger_path)?;

    if !yes {
        let confirm = prompt_yes_no(&format!("Delete entry {} on {}?", id, date), false)?;
        if !confirm {
            println!("Not deleted.");
            return Ok(());
        }
    }

    ledger.delete_entry(date, id)?;
    println!("Deleted entry {} on {}.", id, date);
    Ok(())
}

/// Show today's entries, totals, and macro breakdown.
fn cmd_today(ledger_path: &str) -> Result<()> {
    let ledger = open_ledger(ledger_path)?;
    let date = today();

    let totals = report::daily_total(&ledger, &date);
    display_day(&date, ledger.day(&date), &totals);
    display_macro_breakdown(&report::macro_breakdown(&totals));
    Ok(())
}

/// Show every day with per-day totals, then the grand total.
fn cmd_history(ledger_path: &str) -> Result<()> {
    let ledger = open_ledger(ledger_path)?;

    if ledger.is_empty() {
        println!("No history.");
        return Ok(());
    }

    for date in ledger.dates() {
        let totals = report::daily_total(&ledger, date);
        display_day(date, ledger.day(date), &totals);
    }

    println!();
    display_totals("Grand total", &report::grand_total(&ledger));
    display_macro_breakdown(&report::macro_breakdown(&report::grand_total(&ledger)));
    Ok(())
}

/// Show calories per day as a bar chart.
fn cmd_chart(ledger_path: &str) -> Result<()> {
    let ledger = open_ledger(ledger_path)?;
    display_calorie_chart(&report::time_series(&ledger));
    Ok(())
}

/// List the food catalog.
fn cmd_foods(catalog_path: &str) -> Result<()> {
    if let Some(catalog) = load_catalog(catalog_path)? {
        display_catalog(catalog.foods());
    }
    Ok(())
}
