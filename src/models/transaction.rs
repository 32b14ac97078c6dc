use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "i" => Some(Self::Income),
            "expense" | "out" | "e" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dated money movement. Expenses are stored negative and incomes
/// positive, but readers go through `abs_amount` where magnitude matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Transaction {
    pub(crate) id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub(crate) amount: Decimal,
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
    pub(crate) category: String,
    #[serde(rename = "type")]
    pub(crate) kind: TransactionKind,
}

impl Transaction {
    pub(crate) fn from_draft(id: String, draft: TransactionDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
            category: draft.category,
            kind: draft.kind,
        }
    }

    pub(crate) fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub(crate) fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// `YYYY-MM` bucket of the effective date.
    pub(crate) fn month(&self) -> String {
        month_key(self.date)
    }

    pub(crate) fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            amount: self.amount,
            date: self.date,
            description: self.description.clone(),
            category: self.category.clone(),
            kind: self.kind,
        }
    }
}

/// Every transaction field except the id: the payload of add and update.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TransactionDraft {
    pub(crate) amount: Decimal,
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) kind: TransactionKind,
}
