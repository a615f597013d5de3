use clap::{Parser, Subcommand};

/// FoodLedger — a food diary CLI that tracks nutrient and cost totals per day.
#[derive(Parser, Debug)]
#[command(name = "food_ledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog (JSON array or CSV).
    #[arg(short, long, default_value = "food_data.json")]
    pub catalog: String,

    /// Path to the ledger file.
    #[arg(short, long, default_value = "records.json")]
    pub ledger: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a food for today (or a given date).
    Add {
        /// Catalog name of the food (exact, case-sensitive).
        food: String,

        /// Quantity in the food's catalog unit. Prompted for if omitted.
        quantity: Option<f64>,

        /// Day to log under (YYYY-MM-DD); defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Change the quantity of a logged entry.
    Edit {
        /// Day the entry was logged under (YYYY-MM-DD).
        date: String,

        /// Entry id (shown by `today` and `history`).
        id: u64,

        /// New quantity.
        quantity: f64,
    },

    /// Delete a logged entry.
    Delete {
        /// Day the entry was logged under (YYYY-MM-DD).
        date: String,

        /// Entry id.
        id: u64,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show today's entries, totals, and macro breakdown.
    Today,

    /// Show all days with per-day and grand totals.
    History,

    /// Show calories per day as a bar chart.
    Chart,

    /// List the food catalog.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Today
    }
}
