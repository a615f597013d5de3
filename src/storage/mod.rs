mod json_file;
mod memory;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::Entry;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// The persisted shape of the ledger: date -> ordered entries.
///
/// `BTreeMap` keeps the ISO date keys sorted, so iteration is
/// chronological and the serialized document is deterministic.
pub type LedgerData = BTreeMap<String, Vec<Entry>>;

/// Load/save contract for the full ledger state.
///
/// `save` replaces the entire previously stored state and must be atomic:
/// a failed save leaves the prior state observable by the next `load`.
pub trait LedgerStore {
    /// Previously saved state, or an empty map if nothing was saved yet.
    fn load(&self) -> Result<LedgerData>;

    /// Write the complete current state, replacing any prior state.
    fn save(&self, data: &LedgerData) -> Result<()>;
}

/// A shared reference to a store is itself a store. Lets one store back a
/// ledger while the owner keeps inspecting it (used heavily in tests).
impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn load(&self) -> Result<LedgerData> {
        (**self).load()
    }

    fn save(&self, data: &LedgerData) -> Result<()> {
        (**self).save(data)
    }
}
