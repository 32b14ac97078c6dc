//! Derived views over the record store: category totals, the monthly trend,
//! budget usage, summary totals and list search.
//!
//! Everything here is a pure function of its input slices. Expense
//! magnitudes always go through `abs()` so either sign convention gives the
//! same numbers.

use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, HashMap};

use crate::models::{month_label, Budget, Transaction};

/// Number of monthly buckets the dashboard trend keeps.
pub(crate) const TREND_MONTHS: usize = 12;

/// Number of records the overview lists under "Recent Transactions".
pub(crate) const RECENT_COUNT: usize = 5;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: String,
    pub(crate) total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthlyPoint {
    /// `YYYY-MM`
    pub(crate) month: String,
    /// e.g. `Jul 2025`
    pub(crate) label: String,
    pub(crate) amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetUsage {
    pub(crate) budget_id: String,
    pub(crate) category: String,
    pub(crate) month: String,
    pub(crate) spent: Decimal,
    pub(crate) limit: Decimal,
    /// `None` when the limit is zero and something was spent.
    pub(crate) percentage: Option<Decimal>,
    pub(crate) is_over_budget: bool,
}

impl BudgetUsage {
    /// Bar fill in percent. Only the display clamps; `percentage` does not.
    pub(crate) fn progress(&self) -> Decimal {
        match self.percentage {
            Some(p) => p.clamp(Decimal::ZERO, HUNDRED),
            None => HUNDRED,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total_income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) total_balance: Decimal,
    pub(crate) transaction_count: usize,
    pub(crate) monthly_income: Decimal,
    pub(crate) monthly_expenses: Decimal,
}

/// Expense spend per category, largest first. Ties go by category key so
/// the order never depends on input order.
pub(crate) fn category_totals(txns: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for txn in txns.iter().filter(|t| t.is_expense()) {
        *totals.entry(txn.category.as_str()).or_default() += txn.abs_amount();
    }

    let mut result: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    result.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    result
}

/// Percentage of `part` in `whole`, one decimal place. Zero when `whole` is zero.
pub(crate) fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * HUNDRED).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Per-month magnitude of every transaction, oldest first, keeping only
/// the most recent `months` buckets.
///
/// Income is summed in as well: the trend tracks money movement per month,
/// not just spend.
pub(crate) fn monthly_series(txns: &[Transaction], months: usize) -> Vec<MonthlyPoint> {
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for txn in txns {
        *buckets.entry(txn.month()).or_default() += txn.abs_amount();
    }

    let skip = buckets.len().saturating_sub(months);
    buckets
        .into_iter()
        .skip(skip)
        .map(|(month, amount)| MonthlyPoint {
            label: month_label(&month),
            month,
            amount: round_money(amount),
        })
        .collect()
}

/// Expense magnitude for one category within one `YYYY-MM` month.
pub(crate) fn month_spending(txns: &[Transaction], category: &str, month: &str) -> Decimal {
    txns.iter()
        .filter(|t| t.is_expense() && t.category == category && in_month(t, month))
        .map(Transaction::abs_amount)
        .sum()
}

pub(crate) fn budget_usage(budget: &Budget, txns: &[Transaction]) -> BudgetUsage {
    let spent = month_spending(txns, &budget.category, &budget.month);
    let limit = budget.amount;

    let percentage = if limit.is_zero() {
        spent.is_zero().then_some(Decimal::ZERO)
    } else {
        Some(spent / limit * HUNDRED)
    };

    BudgetUsage {
        budget_id: budget.id.clone(),
        category: budget.category.clone(),
        month: budget.month.clone(),
        spent,
        limit,
        percentage,
        is_over_budget: spent > limit,
    }
}

/// Budgets whose period is `month`, in store order.
pub(crate) fn budgets_for_month<'a>(budgets: &'a [Budget], month: &str) -> Vec<&'a Budget> {
    budgets.iter().filter(|b| b.month == month).collect()
}

/// All-time totals plus the income/expense figures for `month`.
pub(crate) fn summary_totals(txns: &[Transaction], month: &str) -> Summary {
    let (total_income, total_expenses) = income_and_expenses(txns.iter());
    let (monthly_income, monthly_expenses) =
        income_and_expenses(txns.iter().filter(|t| in_month(t, month)));

    Summary {
        total_income,
        total_expenses,
        total_balance: total_income - total_expenses,
        transaction_count: txns.len(),
        monthly_income,
        monthly_expenses,
    }
}

/// Case-insensitive substring match on description or category, in input order.
pub(crate) fn search<'a>(txns: &'a [Transaction], query: &str) -> Vec<&'a Transaction> {
    let needle = query.to_lowercase();
    txns.iter()
        .filter(|t| {
            t.description.to_lowercase().contains(&needle)
                || t.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The first `n` records in store order (newest additions first).
pub(crate) fn recent(txns: &[Transaction], n: usize) -> &[Transaction] {
    &txns[..n.min(txns.len())]
}

fn income_and_expenses<'a>(txns: impl Iterator<Item = &'a Transaction>) -> (Decimal, Decimal) {
    txns.fold((Decimal::ZERO, Decimal::ZERO), |(income, expenses), t| {
        if t.is_income() {
            (income + t.amount, expenses)
        } else {
            (income, expenses + t.abs_amount())
        }
    })
}

fn in_month(txn: &Transaction, month: &str) -> bool {
    txn.month() == month
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
