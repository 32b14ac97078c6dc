//! Turns raw user input (command arguments, CLI flags) into validated drafts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{
    current_month, parse_month, today, BudgetDraft, Category, TransactionDraft, TransactionKind,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Please enter a valid positive amount (got '{0}')")]
    InvalidAmount(String),
    #[error("Please select a valid date as YYYY-MM-DD (got '{0}')")]
    InvalidDate(String),
    #[error("Please enter a month as YYYY-MM (got '{0}')")]
    InvalidMonth(String),
    #[error("Please enter a description")]
    EmptyDescription,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Transaction type must be 'income' or 'expense' (got '{0}')")]
    InvalidKind(String),
}

/// Raw transaction fields as typed by the user. `None` means "use the default".
#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionInput {
    pub(crate) amount: String,
    pub(crate) date: Option<String>,
    pub(crate) description: String,
    pub(crate) category: Option<String>,
    pub(crate) kind: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct BudgetInput {
    pub(crate) category: String,
    pub(crate) amount: String,
    pub(crate) month: Option<String>,
}

/// Validate a transaction. The stored amount is negative for expenses and
/// positive for income.
pub(crate) fn parse_transaction(input: &TransactionInput) -> Result<TransactionDraft, ValidationError> {
    let kind = match input.kind.as_deref() {
        None => TransactionKind::Expense,
        Some(k) => {
            TransactionKind::parse(k).ok_or_else(|| ValidationError::InvalidKind(k.to_string()))?
        }
    };

    let magnitude = parse_positive_amount(&input.amount)?;
    let amount = match kind {
        TransactionKind::Expense => -magnitude,
        TransactionKind::Income => magnitude,
    };

    let date = match input.date.as_deref() {
        None => today(),
        Some(d) => parse_date(d)?,
    };

    let description = input.description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let category = match input.category.as_deref() {
        None => Category::Other.as_str().to_string(),
        Some(c) => normalize_category(c)?,
    };

    Ok(TransactionDraft {
        amount,
        date,
        description: description.to_string(),
        category,
        kind,
    })
}

pub(crate) fn parse_budget(input: &BudgetInput) -> Result<BudgetDraft, ValidationError> {
    let category = normalize_category(&input.category)?;
    let amount = parse_positive_amount(&input.amount)?;
    let month = match input.month.as_deref() {
        None => current_month(),
        Some(m) => {
            let m = m.trim();
            if parse_month(m).is_none() {
                return Err(ValidationError::InvalidMonth(m.to_string()));
            }
            m.to_string()
        }
    };
    Ok(BudgetDraft {
        category,
        amount,
        month,
    })
}

/// Accepts `12`, `12.50` and `$1,200.00`. Zero and negatives are rejected;
/// the sign comes from the transaction type.
pub(crate) fn parse_positive_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let cleaned = raw.trim().replace(['$', ','], "");
    match Decimal::from_str(&cleaned) {
        Ok(d) if d > Decimal::ZERO => Ok(d),
        _ => Err(ValidationError::InvalidAmount(raw.trim().to_string())),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.trim().to_string()))
}

/// Known categories are matched case-insensitively and stored under their
/// canonical key; anything else is kept verbatim.
fn normalize_category(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingCategory);
    }
    Ok(Category::find_by_name(trimmed)
        .map_or_else(|| trimmed.to_string(), |c| c.as_str().to_string()))
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
