use anyhow::{Context, Result};

use crate::models::{Budget, Transaction};

pub(crate) fn encode_transactions(txns: &[Transaction]) -> Result<String> {
    serde_json::to_string(txns).context("Failed to serialize transactions")
}

pub(crate) fn decode_transactions(json: &str) -> Result<Vec<Transaction>> {
    serde_json::from_str(json).context("Failed to parse stored transactions")
}

pub(crate) fn encode_budgets(budgets: &[Budget]) -> Result<String> {
    serde_json::to_string(budgets).context("Failed to serialize budgets")
}

pub(crate) fn decode_budgets(json: &str) -> Result<Vec<Budget>> {
    serde_json::from_str(json).context("Failed to parse stored budgets")
}
