use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("No entry with id {id} on {date}")]
    EntryNotFound { date: String, id: u64 },

    #[error("Invalid quantity: {0} (must be a finite number > 0)")]
    InvalidQuantity(f64),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
