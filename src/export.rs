use anyhow::{Context, Result};
use std::path::Path;

use crate::models::Transaction;

const HEADER: [&str; 6] = ["id", "date", "type", "category", "description", "amount"];

/// Write transactions to a CSV file, one row each, in the given order.
/// Returns the number of rows written (header excluded).
pub(crate) fn write_csv(path: &Path, txns: &[&Transaction]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    wtr.write_record(HEADER)?;
    for txn in txns {
        wtr.write_record([
            txn.id.as_str(),
            &txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.as_str(),
            txn.category.as_str(),
            txn.description.as_str(),
            &format!("{:.2}", txn.amount),
        ])?;
    }
    wtr.flush().context("Failed to flush CSV file")?;
    Ok(txns.len())
}

/// Expand a leading `~/` to `$HOME`.
pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
