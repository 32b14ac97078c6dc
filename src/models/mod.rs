mod budget;
mod category;
mod month;
mod transaction;

pub(crate) use budget::{Budget, BudgetDraft};
pub(crate) use category::{category_glyph, Category};
pub(crate) use month::{current_month, month_key, month_label, parse_month, shift_month, today};
pub(crate) use transaction::{Transaction, TransactionDraft, TransactionKind};

#[cfg(test)]
mod tests;
