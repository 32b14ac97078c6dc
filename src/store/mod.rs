mod codec;
mod ledger;
mod schema;
mod storage;

use anyhow::Result;
use ulid::Ulid;

pub(crate) use codec::{decode_budgets, decode_transactions, encode_budgets, encode_transactions};
pub(crate) use ledger::Ledger;
pub(crate) use storage::{Storage, BUDGETS_KEY, TRANSACTIONS_KEY};

use crate::models::{Budget, BudgetDraft, Transaction, TransactionDraft};

/// Canonical in-memory list of transactions and budgets.
///
/// Mutation methods are the only write path; everything else reads the
/// slices. Persistence is a separate step (`save`) the caller runs after
/// each mutation.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct RecordStore {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

impl RecordStore {
    pub(crate) fn from_records(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// Read both collections from storage. A missing key is an empty list.
    pub(crate) fn load(storage: &Storage) -> Result<Self> {
        let transactions = match storage.get(TRANSACTIONS_KEY)? {
            Some(json) => decode_transactions(&json)?,
            None => Vec::new(),
        };
        let budgets = match storage.get(BUDGETS_KEY)? {
            Some(json) => decode_budgets(&json)?,
            None => Vec::new(),
        };
        tracing::info!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "loaded records"
        );
        Ok(Self::from_records(transactions, budgets))
    }

    pub(crate) fn save(&self, storage: &Storage) -> Result<()> {
        storage.set(TRANSACTIONS_KEY, &encode_transactions(&self.transactions)?)?;
        storage.set(BUDGETS_KEY, &encode_budgets(&self.budgets)?)?;
        tracing::debug!(
            transactions = self.transactions.len(),
            budgets = self.budgets.len(),
            "saved records"
        );
        Ok(())
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub(crate) fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub(crate) fn budget(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    // ── Transactions ──────────────────────────────────────────

    /// Newest first: the created record goes to the front.
    pub(crate) fn add_transaction(&mut self, draft: TransactionDraft) -> Transaction {
        let txn = Transaction::from_draft(new_id("txn"), draft);
        tracing::info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "added transaction");
        self.transactions.insert(0, txn.clone());
        txn
    }

    /// Replace every field but the id. Returns false if no record matched.
    pub(crate) fn update_transaction(&mut self, id: &str, draft: TransactionDraft) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = Transaction::from_draft(slot.id.clone(), draft);
                tracing::info!(%id, "updated transaction");
                true
            }
            None => {
                tracing::debug!(%id, "update of unknown transaction ignored");
                false
            }
        }
    }

    pub(crate) fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            tracing::info!(%id, "deleted transaction");
        }
        removed
    }

    // ── Budgets ───────────────────────────────────────────────

    /// Budgets keep creation order: the created record goes to the back.
    pub(crate) fn add_budget(&mut self, draft: BudgetDraft) -> Budget {
        let budget = Budget::from_draft(new_id("bud"), draft);
        tracing::info!(id = %budget.id, category = %budget.category, month = %budget.month, "added budget");
        self.budgets.push(budget.clone());
        budget
    }

    pub(crate) fn update_budget(&mut self, id: &str, draft: BudgetDraft) -> bool {
        match self.budgets.iter_mut().find(|b| b.id == id) {
            Some(slot) => {
                *slot = Budget::from_draft(slot.id.clone(), draft);
                tracing::info!(%id, "updated budget");
                true
            }
            None => {
                tracing::debug!(%id, "update of unknown budget ignored");
                false
            }
        }
    }

    pub(crate) fn delete_budget(&mut self, id: &str) -> bool {
        let before = self.budgets.len();
        self.budgets.retain(|b| b.id != id);
        let removed = self.budgets.len() != before;
        if removed {
            tracing::info!(%id, "deleted budget");
        }
        removed
    }
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Ulid::new())
}
