use anyhow::Result;
use std::path::Path;

use super::{RecordStore, Storage};
use crate::models::{Budget, BudgetDraft, Transaction, TransactionDraft};

/// The record store together with where it is persisted.
///
/// Every mutation is followed by a save. Saving is best effort: a failure
/// is logged and the in-memory state stays authoritative.
pub(crate) struct Ledger {
    records: RecordStore,
    storage: Storage,
}

impl Ledger {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let storage = Storage::open(path)?;
        Self::with_storage(storage)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        Self::with_storage(Storage::open_in_memory()?)
    }

    fn with_storage(storage: Storage) -> Result<Self> {
        let records = RecordStore::load(&storage)?;
        Ok(Self { records, storage })
    }

    pub(crate) fn records(&self) -> &RecordStore {
        &self.records
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        self.records.transactions()
    }

    pub(crate) fn budgets(&self) -> &[Budget] {
        self.records.budgets()
    }

    pub(crate) fn add_transaction(&mut self, draft: TransactionDraft) -> Transaction {
        let txn = self.records.add_transaction(draft);
        self.persist();
        txn
    }

    pub(crate) fn update_transaction(&mut self, id: &str, draft: TransactionDraft) -> bool {
        let changed = self.records.update_transaction(id, draft);
        if changed {
            self.persist();
        }
        changed
    }

    pub(crate) fn delete_transaction(&mut self, id: &str) -> bool {
        let changed = self.records.delete_transaction(id);
        if changed {
            self.persist();
        }
        changed
    }

    pub(crate) fn add_budget(&mut self, draft: BudgetDraft) -> Budget {
        let budget = self.records.add_budget(draft);
        self.persist();
        budget
    }

    pub(crate) fn update_budget(&mut self, id: &str, draft: BudgetDraft) -> bool {
        let changed = self.records.update_budget(id, draft);
        if changed {
            self.persist();
        }
        changed
    }

    pub(crate) fn delete_budget(&mut self, id: &str) -> bool {
        let changed = self.records.delete_budget(id);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&self) {
        if let Err(e) = self.records.save(&self.storage) {
            tracing::warn!(error = %format!("{e:#}"), "failed to save records");
        }
    }
}
