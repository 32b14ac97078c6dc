use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending cap for one category in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Budget {
    pub(crate) id: String,
    pub(crate) category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub(crate) amount: Decimal,
    /// Format: "YYYY-MM"
    pub(crate) month: String,
}

impl Budget {
    pub(crate) fn from_draft(id: String, draft: BudgetDraft) -> Self {
        Self {
            id,
            category: draft.category,
            amount: draft.amount,
            month: draft.month,
        }
    }

    pub(crate) fn to_draft(&self) -> BudgetDraft {
        BudgetDraft {
            category: self.category.clone(),
            amount: self.amount,
            month: self.month.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BudgetDraft {
    pub(crate) category: String,
    pub(crate) amount: Decimal,
    pub(crate) month: String,
}
