use std::cell::{Cell, RefCell};

use crate::error::{LedgerError, Result};
use crate::storage::{LedgerData, LedgerStore};

/// In-process store for tests.
///
/// Tracks how many saves happened and can be told to fail the next one,
/// which lets tests pin down the validate-before-persist discipline.
#[derive(Default)]
pub struct MemoryStore {
    data: RefCell<LedgerData>,
    saves: Cell<u32>,
    fail_next_save: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }

    /// Make the next `save` call fail without changing stored state.
    pub fn fail_next_save(&self) {
        self.fail_next_save.set(true);
    }

    /// Snapshot of what is currently "persisted".
    pub fn stored(&self) -> LedgerData {
        self.data.borrow().clone()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<LedgerData> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, data: &LedgerData) -> Result<()> {
        if self.fail_next_save.replace(false) {
            return Err(LedgerError::Storage("simulated save failure".to_string()));
        }
        *self.data.borrow_mut() = data.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
