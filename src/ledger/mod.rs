use chrono::NaiveDate;

use crate::catalog::FoodCatalog;
use crate::error::{LedgerError, Result};
use crate::models::Entry;
use crate::storage::{LedgerData, LedgerStore};

/// The date-bucketed collection of logged entries.
///
/// Single source of truth for everything the report functions read.
/// Every mutation validates its preconditions, persists the full state
/// through the store, and only then becomes visible in memory, so the
/// in-memory ledger never diverges from what was last durably saved.
pub struct Ledger<S: LedgerStore> {
    buckets: LedgerData,
    next_id: u64,
    store: S,
}

impl<S: LedgerStore> Ledger<S> {
    /// Construct a ledger from persisted state (empty if none exists).
    ///
    /// Corrupt persisted data surfaces as `LedgerError::Storage` rather
    /// than being treated as empty; losing history silently is worse than
    /// making the user decide what to do with the file.
    pub fn open(store: S) -> Result<Self> {
        let buckets = store.load()?;
        let next_id = buckets
            .values()
            .flatten()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max + 1);
        Ok(Self {
            buckets,
            next_id,
            store,
        })
    }

    /// Log a consumption event: resolve the food, derive nutrient/cost
    /// values from the quantity, append to the day's bucket, persist.
    ///
    /// The returned entry is the caller's change notification.
    pub fn add_entry(
        &mut self,
        date: &str,
        catalog: &FoodCatalog,
        food_name: &str,
        quantity: f64,
    ) -> Result<Entry> {
        validate_quantity(quantity)?;
        validate_date(date)?;
        let def = catalog
            .find(food_name)
            .ok_or_else(|| LedgerError::FoodNotFound(food_name.to_string()))?;

        let entry = Entry::from_definition(self.next_id, date, def, quantity);

        let mut next = self.buckets.clone();
        next.entry(date.to_string())
            .or_default()
            .push(entry.clone());

        self.commit(next)?;
        self.next_id += 1;
        Ok(entry)
    }

    /// Change an entry's quantity, recomputing every derived field from
    /// the CURRENT catalog definition for its food name.
    ///
    /// The stored values were computed against whatever the catalog said
    /// at the last write; reusing them here would silently keep stale
    /// rates. If the name no longer resolves the edit fails instead.
    /// The snapshotted `unit` label is kept as-is (see `Entry::recompute`).
    pub fn edit_entry(
        &mut self,
        date: &str,
        id: u64,
        catalog: &FoodCatalog,
        new_quantity: f64,
    ) -> Result<Entry> {
        validate_quantity(new_quantity)?;
        let current = self.find_entry(date, id)?;
        let def = catalog
            .find(&current.food_name)
            .ok_or_else(|| LedgerError::FoodNotFound(current.food_name.clone()))?;

        let mut updated = current.clone();
        updated.recompute(def, new_quantity);

        let mut next = self.buckets.clone();
        let bucket = next.get_mut(date).expect("bucket checked above");
        let slot = bucket
            .iter_mut()
            .find(|e| e.id == id)
            .expect("entry checked above");
        *slot = updated.clone();

        self.commit(next)?;
        Ok(updated)
    }

    /// Remove an entry. Deleting the last entry of a day removes the day's
    /// bucket entirely. A missing entry is an error, not a no-op.
    pub fn delete_entry(&mut self, date: &str, id: u64) -> Result<()> {
        self.find_entry(date, id)?;

        let mut next = self.buckets.clone();
        let bucket = next.get_mut(date).expect("bucket checked above");
        bucket.retain(|e| e.id != id);
        if bucket.is_empty() {
            next.remove(date);
        }

        self.commit(next)
    }

    /// Ordered entries for one day; empty if the day has none.
    pub fn day(&self, date: &str) -> &[Entry] {
        self.buckets.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All days with at least one entry, ascending. Lexicographic order
    /// equals chronological order for ISO dates.
    pub fn dates(&self) -> Vec<&str> {
        self.buckets.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn find_entry(&self, date: &str, id: u64) -> Result<&Entry> {
        self.buckets
            .get(date)
            .and_then(|bucket| bucket.iter().find(|e| e.id == id))
            .ok_or_else(|| LedgerError::EntryNotFound {
                date: date.to_string(),
                id,
            })
    }

    /// Persist a candidate state, then make it the in-memory state.
    /// A failed save leaves `self` untouched.
    fn commit(&mut self, next: LedgerData) -> Result<()> {
        self.store.save(&next)?;
        self.buckets = next;
        Ok(())
    }
}

fn validate_quantity(quantity: f64) -> Result<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(LedgerError::InvalidQuantity(quantity));
    }
    Ok(())
}

fn validate_date(date: &str) -> Result<()> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(date.to_string()))?;
    // only the zero-padded form keeps bucket keys sorting chronologically
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(LedgerError::InvalidDate(date.to_string()));
    }
    Ok(())
}

/// Today's calendar day as an ISO `YYYY-MM-DD` string.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
