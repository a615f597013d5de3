pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod ledger;
pub mod models;
pub mod report;
pub mod storage;

pub use catalog::FoodCatalog;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use models::{Entry, FoodDefinition, NutrientTotals};
